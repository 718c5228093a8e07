//! Host error types.
//!
//! ERROR HANDLING
//! ==============
//! Configuration and startup failures abort `main`. Proxy failures are
//! logged and answered with a gateway status so the browser sees a normal
//! HTTP error and shows its generic alert.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A configuration value was present but malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),

    #[error("invalid BACKEND_URL (expected http:// or https://): {0}")]
    InvalidBackendUrl(String),
}

/// Forwarding a request to the backend failed.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The incoming request body could not be read.
    #[error("request body read failed: {0}")]
    RequestBody(String),

    /// The backend could not be reached or did not answer in time.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::RequestBody(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(err) if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) | Self::HttpClientBuild(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        (self.status(), self.to_string()).into_response()
    }
}

/// Startup failure reported by `main`.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Proxy(#[from] ProxyError),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}
