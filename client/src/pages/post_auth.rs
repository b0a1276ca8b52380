//! Landing route for the sign-in widget. Renders nothing and replaces itself
//! with the role-appropriate destination once the session is known.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::redirect::PostAuthRedirector;
use crate::util::auth::replace_history;

#[component]
pub fn PostAuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let redirector = StoredValue::new(PostAuthRedirector::default());
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        let Some(target) = redirector.try_update_value(|r| r.observe(&state)).flatten() else {
            return;
        };
        log::debug!("post-auth redirect to {}", target.path());
        navigate(target.path(), replace_history());
        redirector.update_value(PostAuthRedirector::complete);
    });
}
