//! Admin console route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside the signed-in guard. Non-admin users are sent to
//! `/dashboard`; admins get the class, mentor, and bookings panels. Data is
//! requested once per mount, after the role gate allows it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bookings_table::BookingsTable;
use crate::components::class_form::ClassForm;
use crate::components::mentor_form::MentorForm;
use crate::components::notice_banner::NoticeBanner;
use crate::config::AppConfig;
use crate::net::api::HttpGateway;
use crate::pages::admin_actions::AdminConsole;
use crate::state::auth::AuthState;
use crate::util::auth::{AdminGate, install_admin_redirect};

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AppConfig>();
    let gate = Memo::new(move |_| AdminGate::from_auth(&auth.get()));

    install_admin_redirect(auth, use_navigate());

    let console = AdminConsole::new(HttpGateway::new(&config), config.session_fetch_delay());
    let requested = StoredValue::new(false);
    Effect::new(move || {
        if gate.get() == AdminGate::Allow && !requested.get_value() {
            requested.set_value(true);
            console.refresh_classes();
            console.refresh_sessions();
        }
    });

    view! {
        <Show when=move || gate.get() == AdminGate::Allow>
            <section class="page admin">
                <h1>"Admin Console"</h1>
                <NoticeBanner state=console.state/>
                <div class="admin__grid">
                    <ClassForm console=console/>
                    <MentorForm console=console/>
                </div>
                <BookingsTable console=console/>
            </section>
        </Show>
    }
}
