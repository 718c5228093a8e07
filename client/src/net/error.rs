//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every network failure is caught at the call site and turned into a blocking
//! alert. Nothing is retried here; the gallery query owns its own retry loop.
//! Form validation failures never reach this type, they stay as `FieldErrors`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401.
    #[error("authentication failed")]
    Authentication,
    /// HTTP 400.
    #[error("bad request")]
    BadRequest,
    /// Any other non-success HTTP status.
    #[error("request failed: {status}")]
    Unknown { status: u16 },
    /// HTTP 200 whose envelope carried a non-200 `resultCode`.
    #[error("backend rejected request: resultCode {code}")]
    Rejected { code: i64 },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The owning UI scope ended before the response arrived.
    #[error("request cancelled")]
    Cancelled,
    /// Backend calls are only issued from the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Authentication,
            400 => Self::BadRequest,
            status => Self::Unknown { status },
        }
    }

    /// Cancelled results are dropped without an alert.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Alert text for a failed login submission.
    pub fn login_alert(&self) -> &'static str {
        match self {
            Self::Authentication => "아이디 또는 패스워드가 올바르지 않습니다.",
            Self::BadRequest => "입력한 정보를 다시 확인해주세요.",
            _ => "로그인 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
        }
    }

    /// Alert text for every other failed mutation.
    pub fn alert(&self) -> &'static str {
        match self {
            Self::Authentication => "로그인이 필요합니다.",
            Self::BadRequest => "입력한 정보를 다시 확인해주세요.",
            _ => "처리 중 오류가 발생했습니다. 다시시도 해주세요.",
        }
    }
}
