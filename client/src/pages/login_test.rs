use super::*;
use crate::state::auth::{Role, SessionUser};

fn user(role: Role) -> SessionUser {
    SessionUser { id: "user_1".to_owned(), display_name: "Ada".to_owned(), role }
}

#[test]
fn login_view_waits_for_auth() {
    assert_eq!(LoginView::from_auth(&AuthState::default()), LoginView::Pending);
}

#[test]
fn login_view_offers_sign_in_when_signed_out() {
    assert_eq!(LoginView::from_auth(&AuthState::signed_out()), LoginView::SignIn);
}

#[test]
fn login_view_continues_to_role_home() {
    assert_eq!(
        LoginView::from_auth(&AuthState::signed_in(user(Role::Admin))),
        LoginView::Continue(RedirectTarget::Admin)
    );
    assert_eq!(
        LoginView::from_auth(&AuthState::signed_in(user(Role::Member))),
        LoginView::Continue(RedirectTarget::Dashboard)
    );
}
