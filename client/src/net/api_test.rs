use super::*;

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn events_failed_message_formats_status() {
    assert_eq!(events_failed_message(500), "events request failed: 500");
}

#[test]
fn auth_endpoints_share_prefix() {
    for endpoint in [LOGIN_ENDPOINT, ME_ENDPOINT, LOGOUT_ENDPOINT] {
        assert!(endpoint.starts_with("/api/auth/"), "{endpoint}");
    }
}

#[test]
fn login_is_unavailable_without_browser() {
    let result = futures::executor::block_on(login(&Credentials::new("user@example.com", "secret1")));
    assert_eq!(result, Err("not available on server".to_owned()));
}

#[test]
fn session_fetch_is_none_without_browser() {
    assert!(futures::executor::block_on(fetch_current_session()).is_none());
}
