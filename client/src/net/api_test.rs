use super::*;

#[test]
fn request_failed_message_prefers_api_error_body() {
    let msg = request_failed_message(AUTH_STATE_ENDPOINT, 502, r#"{"error":"jwks fetch failed: timeout"}"#);
    assert_eq!(msg, "/api/clerk/state failed: 502 jwks fetch failed: timeout");
}

#[test]
fn request_failed_message_falls_back_to_raw_body() {
    let msg = request_failed_message(USER_PROFILE_ENDPOINT, 500, "  upstream exploded \n");
    assert_eq!(msg, "/api/clerk/user failed: 500 upstream exploded");
}

#[test]
fn request_failed_message_omits_empty_body() {
    assert_eq!(request_failed_message(SIGN_OUT_ENDPOINT, 404, ""), "/api/clerk/sign-out failed: 404");
}

#[test]
fn endpoints_live_under_clerk_api_prefix() {
    for endpoint in [AUTH_STATE_ENDPOINT, USER_PROFILE_ENDPOINT, ENVIRONMENT_ENDPOINT, SIGN_OUT_ENDPOINT] {
        assert!(endpoint.starts_with("/api/clerk/"), "{endpoint}");
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn helpers_report_unavailable_outside_browser() {
    let status = futures::executor::block_on(fetch_auth_status());
    assert_eq!(status, Err("not available on server".to_owned()));
    assert!(futures::executor::block_on(fetch_environment()).is_none());
}
