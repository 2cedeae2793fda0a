use super::*;

#[test]
fn network_error_displays_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn status_error_displays_code() {
    assert_eq!(ApiError::Status(503).to_string(), "unexpected status 503");
}

#[test]
fn decode_error_displays_cause() {
    let err = ApiError::Decode("missing field `role`".to_owned());
    assert_eq!(err.to_string(), "malformed response body: missing field `role`");
}

#[test]
fn timeout_error_has_fixed_message() {
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
}
