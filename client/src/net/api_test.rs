use super::*;

#[test]
fn me_request_failed_message_formats_status() {
    assert_eq!(me_request_failed_message(403), "identity request failed: 403");
}

#[test]
fn endpoints_match_host_routes() {
    assert_eq!(ME_ENDPOINT, "/api/auth/me");
    assert_eq!(SIGNOUT_ENDPOINT, "/api/auth/signout");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_current_user_is_unavailable_off_browser() {
    let result = futures::executor::block_on(fetch_current_user());
    assert_eq!(result, Err("not available on server".to_owned()));
}
