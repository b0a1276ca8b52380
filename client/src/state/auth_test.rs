use super::*;
use serde_json::json;

fn user_with(metadata: &Value) -> SessionUser {
    SessionUser::from_parts("user_1", Some("Ada"), Some("Lovelace"), metadata)
}

// =============================================================
// Role resolution
// =============================================================

#[test]
fn exact_admin_claim_resolves_admin() {
    assert_eq!(resolve_role(&json!({ "role": "admin" })), Role::Admin);
}

#[test]
fn other_claims_resolve_member() {
    for metadata in [
        json!({}),
        json!({ "role": "mentor" }),
        json!({ "role": "Admin" }),
        json!({ "role": " admin" }),
        json!({ "role": null }),
        json!({ "role": ["admin"] }),
        json!({ "role": true }),
        Value::Null,
    ] {
        assert_eq!(resolve_role(&metadata), Role::Member, "metadata: {metadata}");
    }
}

// =============================================================
// SessionUser
// =============================================================

#[test]
fn display_name_joins_first_and_last() {
    let user = user_with(&json!({}));
    assert_eq!(user.display_name, "Ada Lovelace");
    assert_eq!(user.id, "user_1");
}

#[test]
fn display_name_falls_back_to_id() {
    let user = SessionUser::from_parts("user_2", Some("  "), None, &json!({}));
    assert_eq!(user.display_name, "user_2");
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn default_state_is_not_loaded() {
    let state = AuthState::default();
    assert!(!state.loaded);
    assert!(!state.is_signed_in());
    assert_eq!(state.role(), None);
}

#[test]
fn role_is_hidden_until_loaded() {
    let state = AuthState { user: Some(user_with(&json!({ "role": "admin" }))), loaded: false };
    assert_eq!(state.role(), None);
    assert!(!state.is_admin());
    assert!(!state.is_signed_in());
}

#[test]
fn signed_in_admin_reports_role() {
    let state = AuthState::signed_in(user_with(&json!({ "role": "admin" })));
    assert!(state.is_signed_in());
    assert_eq!(state.role(), Some(Role::Admin));
    assert!(state.is_admin());
}

#[test]
fn signed_out_has_no_role() {
    let state = AuthState::signed_out();
    assert!(state.loaded);
    assert!(!state.is_signed_in());
    assert_eq!(state.role(), None);
}
