//! Payment hand-off for a booked session. Payment processing itself happens
//! outside this app; the page only identifies the session being paid for.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::MISSING;

#[component]
pub fn PaymentPage() -> impl IntoView {
    let params = use_params_map();
    let session_id = move || {
        params
            .read()
            .get("sessionId")
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| MISSING.to_owned())
    };

    view! {
        <section class="page payment">
            <h1>"Payment"</h1>
            <p>"Session " <strong>{session_id}</strong></p>
            <p class="payment__hint">"Complete payment to confirm this booking."</p>
        </section>
    }
}
