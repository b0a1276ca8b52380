//! "Create Class" panel.

use leptos::prelude::*;

use crate::net::types::{NewClassroom, parse_count};
use crate::pages::admin_actions::AdminConsole;

/// Class creation form. Submit stays disabled until the title is non-blank.
#[component]
pub fn ClassForm(console: AdminConsole) -> impl IntoView {
    let form = RwSignal::new(NewClassroom::default());
    let can_submit = Memo::new(move |_| form.with(NewClassroom::can_submit));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if can_submit.get_untracked() {
            console.submit_class(form);
        }
    };

    view! {
        <section class="panel">
            <h2 class="panel__title">"Create Class"</h2>
            <form class="panel__form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Title"</span>
                    <input
                        class="field__input"
                        type="text"
                        required
                        placeholder="AWS DevOps Engineering Professional Exam Prep"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Initial Enrolled Count"</span>
                    <input
                        class="field__input"
                        type="number"
                        min="0"
                        prop:value=move || form.with(|f| f.enrolled_student_count.to_string())
                        on:input=move |ev| {
                            form.update(|f| f.enrolled_student_count = parse_count(&event_target_value(&ev)));
                        }
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Class Image URL"</span>
                    <input
                        class="field__input"
                        type="url"
                        placeholder="https://.../image.webp"
                        prop:value=move || form.with(|f| f.class_image.clone())
                        on:input=move |ev| form.update(|f| f.class_image = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || !can_submit.get() || console.state.with(|s| s.creating_class)>
                    "Create Class"
                </button>
            </form>
        </section>
    }
}
