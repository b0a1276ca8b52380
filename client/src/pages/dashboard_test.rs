use super::*;
use crate::state::auth::{Role, SessionUser};

#[test]
fn greeting_uses_display_name() {
    let auth = AuthState::signed_in(SessionUser {
        id: "user_9".to_owned(),
        display_name: "Kavindu Perera".to_owned(),
        role: Role::Member,
    });
    assert_eq!(greeting(&auth), "Welcome back, Kavindu Perera.");
}

#[test]
fn greeting_without_user_is_generic() {
    assert_eq!(greeting(&AuthState::signed_out()), "Welcome.");
}
