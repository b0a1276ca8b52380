use super::*;

const BASE: &str = "https://api.skillmentor.test";

#[test]
fn collection_endpoints_format_expected_paths() {
    assert_eq!(classroom_endpoint(BASE), "https://api.skillmentor.test/academic/classroom");
    assert_eq!(session_endpoint(BASE), "https://api.skillmentor.test/academic/session");
    assert_eq!(mentor_endpoint(BASE), "https://api.skillmentor.test/academic/mentor");
}

#[test]
fn session_status_endpoint_carries_target_status() {
    assert_eq!(
        session_status_endpoint(BASE, 12, SessionTransition::Approve),
        "https://api.skillmentor.test/academic/session/12?sessionStatus=ACCEPTED"
    );
    assert_eq!(
        session_status_endpoint(BASE, 12, SessionTransition::Complete),
        "https://api.skillmentor.test/academic/session/12?sessionStatus=COMPLETED"
    );
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn gateway_takes_backend_from_config() {
    let config = AppConfig { backend_url: BASE.to_owned(), ..AppConfig::default() };
    let gateway = HttpGateway::new(&config);
    assert_eq!(gateway.backend_url, BASE);
    assert_eq!(gateway.token_template, crate::config::DEFAULT_TOKEN_TEMPLATE);
}

#[test]
fn gateway_is_unavailable_outside_browser() {
    let gateway = HttpGateway::new(&AppConfig::default());
    let result = futures::executor::block_on(gateway.list_sessions());
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
    assert_eq!(
        ApiError::TransitionNotAllowed { session_id: 4, from: "COMPLETED".to_owned(), action: "Approve" }.to_string(),
        "session 4 is COMPLETED; cannot Approve"
    );
}
