//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::redirect::RedirectTarget;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let next = move || {
        let state = auth.get();
        match RedirectTarget::for_auth(&state) {
            Some(target) if state.is_signed_in() => (target.path(), "Continue"),
            _ => (RedirectTarget::Login.path(), "Sign in"),
        }
    };

    view! {
        <section class="page home">
            <h1>"SkillMentor"</h1>
            <p>"Book one-to-one sessions with mentors across every class on the platform."</p>
            <a class="btn btn--primary" href=move || next().0>{move || next().1}</a>
        </section>
    }
}
