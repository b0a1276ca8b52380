//! "Manage Bookings" panel: session table with approve/complete actions.

use leptos::prelude::*;

use crate::net::types::{Session, SessionTransition};
use crate::pages::admin_actions::AdminConsole;
use crate::util::time_format::{duration_text, format_start_time};

#[component]
fn TransitionButton(console: AdminConsole, session: Session, transition: SessionTransition) -> impl IntoView {
    let enabled = session.session_status.can_transition_to(transition);
    let class = match transition {
        SessionTransition::Approve => "btn btn--small",
        SessionTransition::Complete => "btn btn--small btn--primary",
    };
    let session = StoredValue::new(session);

    view! {
        <button
            class=class
            disabled=!enabled
            on:click=move |_| console.transition(session.get_value(), transition)
        >
            {transition.label()}
        </button>
    }
}

fn session_row(console: AdminConsole, session: Session) -> impl IntoView {
    let status = session.session_status.as_str().to_owned();
    let status_class = format!("status status--{}", status.to_ascii_lowercase());

    view! {
        <tr>
            <td>{session.class_label()}</td>
            <td>{session.student_label()}</td>
            <td>{session.mentor_label()}</td>
            <td>{format_start_time(&session.start_time)}</td>
            <td>{duration_text(Some(&session.start_time), session.end_time.as_deref())}</td>
            <td><span class=status_class>{status}</span></td>
            <td class="bookings__actions">
                <TransitionButton console=console session=session.clone() transition=SessionTransition::Approve/>
                <TransitionButton console=console session=session transition=SessionTransition::Complete/>
            </td>
        </tr>
    }
}

/// Session list. Approve is offered only for pending bookings and Complete
/// only for accepted ones.
#[component]
pub fn BookingsTable(console: AdminConsole) -> impl IntoView {
    let state = console.state;

    let body = move || {
        let snapshot = state.get();
        if snapshot.loading_sessions {
            view! { <tr><td colspan="7" class="bookings__placeholder">"Loading..."</td></tr> }.into_any()
        } else if snapshot.sessions.is_empty() {
            view! { <tr><td colspan="7" class="bookings__placeholder">"No sessions"</td></tr> }.into_any()
        } else {
            snapshot
                .sessions
                .into_iter()
                .map(|session| session_row(console, session))
                .collect_view()
                .into_any()
        }
    };

    view! {
        <section class="panel panel--wide">
            <div class="panel__header">
                <h2 class="panel__title">"Manage Bookings"</h2>
                <button
                    class="btn"
                    disabled=move || state.with(|s| s.loading_sessions)
                    on:click=move |_| console.refresh_sessions()
                >
                    "Refresh"
                </button>
            </div>
            <table class="bookings">
                <thead>
                    <tr>
                        <th>"Class"</th>
                        <th>"Student"</th>
                        <th>"Mentor"</th>
                        <th>"Date"</th>
                        <th>"Duration"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </section>
    }
}
