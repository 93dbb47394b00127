use super::*;

#[test]
fn from_status_maps_auth_failures_to_unauthorized() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403), ApiError::Unauthorized);
}

#[test]
fn from_status_keeps_other_codes() {
    assert_eq!(ApiError::from_status(404), ApiError::Status(404));
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
}

#[test]
fn is_unauthorized_only_for_unauthorized() {
    assert!(ApiError::Unauthorized.is_unauthorized());
    assert!(!ApiError::Status(500).is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn serde_errors_become_decode() {
    let err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
    assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
}

#[test]
fn display_includes_status_code() {
    assert_eq!(ApiError::Status(502).to_string(), "unexpected status: 502");
}
