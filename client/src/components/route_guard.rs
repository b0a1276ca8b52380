//! Signed-in guard wrapping protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard failure is a content swap, not a navigation: a signed-out visitor on
//! `/dashboard`, `/admin`, or `/payment/:id` sees the login view at that URL.

use leptos::prelude::*;

use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::util::auth::GuardState;

/// Render `children` only for a signed-in session.
///
/// Nothing is rendered until auth has loaded, so protected content never
/// flashes before the session is known.
#[component]
pub fn RequireSignedIn(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = Memo::new(move |_| GuardState::from_auth(&auth.get()));

    move || match guard.get() {
        GuardState::Unknown => ().into_any(),
        GuardState::Authorized => children().into_any(),
        GuardState::Unauthorized => view! { <LoginPage/> }.into_any(),
    }
}
