use super::*;
use crate::state::auth::SessionUser;
use serde_json::json;

fn signed_in(role_claim: serde_json::Value) -> AuthState {
    AuthState::signed_in(SessionUser::from_parts(
        "user_1",
        Some("Sam"),
        None,
        &json!({ "role": role_claim }),
    ))
}

#[test]
fn waits_while_not_loaded() {
    let mut redirector = PostAuthRedirector::default();
    let loading = AuthState { user: None, loaded: false };
    assert_eq!(redirector.observe(&loading), None);
    assert_eq!(redirector.phase(), RedirectPhase::Waiting);

    // A user object present before load completes must not drive a redirect.
    let early = AuthState { loaded: false, ..signed_in(json!("admin")) };
    assert_eq!(redirector.observe(&early), None);
    assert_eq!(redirector.phase(), RedirectPhase::Waiting);
}

#[test]
fn signed_out_goes_to_login() {
    let mut redirector = PostAuthRedirector::default();
    assert_eq!(redirector.observe(&AuthState::signed_out()), Some(RedirectTarget::Login));
    assert_eq!(redirector.phase(), RedirectPhase::Redirecting(RedirectTarget::Login));
}

#[test]
fn admin_goes_to_admin() {
    let mut redirector = PostAuthRedirector::default();
    assert_eq!(redirector.observe(&signed_in(json!("admin"))), Some(RedirectTarget::Admin));
}

#[test]
fn any_other_role_goes_to_dashboard() {
    for claim in [json!("mentor"), json!("ADMIN"), json!(null), json!(1)] {
        let mut redirector = PostAuthRedirector::default();
        assert_eq!(
            redirector.observe(&signed_in(claim.clone())),
            Some(RedirectTarget::Dashboard),
            "claim: {claim}"
        );
    }
}

#[test]
fn fires_once_per_resolved_state() {
    let mut redirector = PostAuthRedirector::default();
    let state = signed_in(json!("admin"));
    assert_eq!(redirector.observe(&state), Some(RedirectTarget::Admin));
    redirector.complete();
    assert_eq!(redirector.phase(), RedirectPhase::Done(RedirectTarget::Admin));

    assert_eq!(redirector.observe(&state), None);
    assert_eq!(redirector.observe(&state.clone()), None);
    assert_eq!(redirector.phase(), RedirectPhase::Done(RedirectTarget::Admin));
}

#[test]
fn re_evaluates_when_resolved_state_changes() {
    let mut redirector = PostAuthRedirector::default();
    assert_eq!(redirector.observe(&AuthState::signed_out()), Some(RedirectTarget::Login));
    redirector.complete();
    assert_eq!(redirector.observe(&signed_in(json!("student"))), Some(RedirectTarget::Dashboard));
    assert_eq!(redirector.phase(), RedirectPhase::Redirecting(RedirectTarget::Dashboard));
}

#[test]
fn complete_without_pending_redirect_is_noop() {
    let mut redirector = PostAuthRedirector::default();
    redirector.complete();
    assert_eq!(redirector.phase(), RedirectPhase::Waiting);
}

#[test]
fn target_paths() {
    assert_eq!(RedirectTarget::Login.path(), "/login");
    assert_eq!(RedirectTarget::Admin.path(), "/admin");
    assert_eq!(RedirectTarget::Dashboard.path(), "/dashboard");
}
