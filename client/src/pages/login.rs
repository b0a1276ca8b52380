//! Login page hosting the provider's sign-in widget.
//!
//! Also rendered in place by the signed-in guard and the wildcard route, so
//! it must not navigate on its own.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::redirect::RedirectTarget;
use crate::util::clerk;

/// Path the sign-in widget sends the user to after authenticating.
pub const POST_AUTH_PATH: &str = "/post-auth";

/// What the login view shows for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginView {
    /// Session not known yet.
    Pending,
    SignIn,
    /// Already signed in; offer a link onward instead of the widget.
    Continue(RedirectTarget),
}

impl LoginView {
    pub fn from_auth(auth: &AuthState) -> Self {
        if !auth.loaded {
            Self::Pending
        } else if auth.is_signed_in() {
            Self::Continue(RedirectTarget::for_auth(auth).unwrap_or(RedirectTarget::Dashboard))
        } else {
            Self::SignIn
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let mode = Memo::new(move |_| LoginView::from_auth(&auth.get()));

    Effect::new(move || {
        if mode.get() == LoginView::SignIn {
            clerk::mount_sign_in(POST_AUTH_PATH);
        }
    });
    on_cleanup(clerk::unmount_sign_in);

    view! {
        <div class="login-page">
            {move || match mode.get() {
                LoginView::Pending => view! { <p class="login-page__status">"Loading..."</p> }.into_any(),
                LoginView::SignIn => view! { <h1 class="login-page__title">"Sign in to SkillMentor"</h1> }.into_any(),
                LoginView::Continue(target) => view! {
                    <p class="login-page__status">
                        "You are already signed in. "
                        <a href=target.path()>"Continue"</a>
                    </p>
                }
                .into_any(),
            }}
            <div id=clerk::SIGN_IN_ROOT_ID class="login-page__widget"></div>
        </div>
    }
}
