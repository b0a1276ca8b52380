//! Top bar with brand link, navigation, and sign-in/sign-out controls.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// End the provider session, mark `auth` signed out, and load `/login`.
pub fn sign_out_to_login(auth: RwSignal<AuthState>) {
    crate::util::task::spawn(async move {
        crate::util::clerk::sign_out().await;
        let _ = auth.try_set(AuthState::signed_out());
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                if let Err(err) = w.location().set_href(crate::state::redirect::RedirectTarget::Login.path()) {
                    log::warn!("could not open login page: {err:?}");
                }
            }
        }
    });
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let display_name = move || {
        auth.get()
            .user
            .map(|user| user.display_name)
            .unwrap_or_default()
    };

    let on_sign_out = move |_| sign_out_to_login(auth);

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"SkillMentor"</a>
            <nav class="site-header__nav">
                <Show when=move || auth.get().is_signed_in()>
                    <a href="/dashboard">"Dashboard"</a>
                </Show>
                <Show when=move || auth.get().is_admin()>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=move || {
                    view! {
                        <Show when=move || auth.get().loaded>
                            <a href="/login" class="btn">"Sign in"</a>
                        </Show>
                    }
                }
            >
                <span class="site-header__user">{display_name}</span>
                <button class="btn" on:click=on_sign_out>"Sign out"</button>
            </Show>
        </header>
    }
}
