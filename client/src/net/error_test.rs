use super::*;

#[test]
fn from_status_classifies_auth_and_bad_request() {
    assert_eq!(ApiError::from_status(401), ApiError::Authentication);
    assert_eq!(ApiError::from_status(400), ApiError::BadRequest);
    assert_eq!(ApiError::from_status(500), ApiError::Unknown { status: 500 });
    assert_eq!(ApiError::from_status(403), ApiError::Unknown { status: 403 });
}

#[test]
fn login_alert_messages() {
    assert_eq!(
        ApiError::Authentication.login_alert(),
        "아이디 또는 패스워드가 올바르지 않습니다."
    );
    assert_eq!(ApiError::BadRequest.login_alert(), "입력한 정보를 다시 확인해주세요.");
    assert_eq!(
        ApiError::Unknown { status: 500 }.login_alert(),
        "로그인 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요."
    );
    assert_eq!(
        ApiError::Network("offline".to_owned()).login_alert(),
        "로그인 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요."
    );
}

#[test]
fn generic_alert_messages() {
    assert_eq!(ApiError::Authentication.alert(), "로그인이 필요합니다.");
    assert_eq!(ApiError::BadRequest.alert(), "입력한 정보를 다시 확인해주세요.");
    assert_eq!(
        ApiError::Rejected { code: 500 }.alert(),
        "처리 중 오류가 발생했습니다. 다시시도 해주세요."
    );
}

#[test]
fn display_includes_status() {
    assert_eq!(ApiError::Unknown { status: 502 }.to_string(), "request failed: 502");
    assert_eq!(
        ApiError::Rejected { code: 409 }.to_string(),
        "backend rejected request: resultCode 409"
    );
}

#[test]
fn only_cancelled_is_cancelled() {
    assert!(ApiError::Cancelled.is_cancelled());
    assert!(!ApiError::Authentication.is_cancelled());
}
