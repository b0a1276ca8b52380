//! Dismissible banner for admin console outcomes and failures.

use leptos::prelude::*;

use crate::state::admin::AdminState;

#[component]
pub fn NoticeBanner(state: RwSignal<AdminState>) -> impl IntoView {
    let notice = move || state.get().notice;
    let notice_class = move || {
        if notice().is_some_and(|n| n.is_error()) { "notice notice--error" } else { "notice" }
    };

    view! {
        <Show when=move || notice().is_some()>
            <div class=notice_class role="status">
                <span>{move || notice().map(|n| n.message).unwrap_or_default()}</span>
                <button
                    class="notice__dismiss"
                    title="Dismiss"
                    on:click=move |_| state.update(AdminState::dismiss_notice)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
