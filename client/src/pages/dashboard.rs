//! Signed-in landing page for non-admin members.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::site_header::sign_out_to_login;
use crate::state::auth::AuthState;

/// Greeting line for the current session.
pub fn greeting(auth: &AuthState) -> String {
    match &auth.user {
        Some(user) => format!("Welcome back, {}.", user.display_name),
        None => "Welcome.".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="page dashboard">
            <h1>{move || greeting(&auth.get())}</h1>
            <p class="dashboard__role">
                "Signed in as "
                {move || auth.get().role().map(|r| r.label()).unwrap_or_default()}
            </p>
            <div class="dashboard__actions">
                <Show when=move || auth.get().is_admin()>
                    <a class="btn btn--primary" href="/admin">"Open admin console"</a>
                </Show>
                <button class="btn" on:click=move |_| sign_out_to_login(auth)>"Sign out"</button>
            </div>
        </section>
    }
}
