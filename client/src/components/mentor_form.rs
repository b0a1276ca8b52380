//! "Create Mentor" panel: mentor details plus the classes to assign them to.

use leptos::prelude::*;

use crate::net::types::{MentorDraft, MentorField};
use crate::pages::admin_actions::AdminConsole;
use crate::state::admin::toggle_class;

/// One input bound to a single `MentorDraft` field.
#[component]
fn DraftInput(
    form: RwSignal<MentorDraft>,
    field: MentorField,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let class = if wide { "field field--wide" } else { "field" };

    view! {
        <label class=class>
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(|f| f.field(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}

/// Mentor creation form. Submit is enabled once first name, last name,
/// email, and at least one class are filled in.
#[component]
pub fn MentorForm(console: AdminConsole) -> impl IntoView {
    let form = RwSignal::new(MentorDraft::default());
    let selected = RwSignal::new(Vec::<i64>::new());
    let can_submit = Memo::new(move |_| selected.with(|ids| form.with(|f| f.can_submit(ids))));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if can_submit.get_untracked() {
            console.submit_mentor(form, selected);
        }
    };

    let class_options = move || {
        console
            .state
            .get()
            .classes
            .into_iter()
            .map(|class| {
                let id = class.class_room_id;
                view! {
                    <label class="class-picker__option">
                        <input
                            type="checkbox"
                            prop:checked=move || selected.with(|ids| ids.contains(&id))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                selected.update(|ids| toggle_class(ids, id, checked));
                            }
                        />
                        <span>{class.title}</span>
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <section class="panel">
            <h2 class="panel__title">"Create Mentor"</h2>
            <form class="panel__form" on:submit=on_submit>
                <div class="field-grid">
                    <DraftInput form=form field=MentorField::ClerkMentorId label="Clerk Mentor ID"/>
                    <DraftInput form=form field=MentorField::Title label="Title"/>
                    <DraftInput form=form field=MentorField::FirstName label="First Name"/>
                    <DraftInput form=form field=MentorField::LastName label="Last Name"/>
                    <DraftInput form=form field=MentorField::Address label="Address" wide=true/>
                    <DraftInput form=form field=MentorField::Email label="Email" kind="email"/>
                    <DraftInput form=form field=MentorField::PhoneNumber label="Phone" kind="tel"/>
                    <DraftInput form=form field=MentorField::SessionFee label="Session Fee" kind="number"/>
                    <DraftInput form=form field=MentorField::Profession label="Profession"/>
                    <label class="field field--wide">
                        <span class="field__label">"Subject / Bio"</span>
                        <textarea
                            class="field__input"
                            rows="3"
                            prop:value=move || form.with(|f| f.subject.clone())
                            on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <DraftInput form=form field=MentorField::Qualification label="Qualification"/>
                    <DraftInput
                        form=form
                        field=MentorField::MentorImage
                        label="Image URL"
                        kind="url"
                        placeholder="https://.../mentor.webp"
                    />
                </div>

                <fieldset class="class-picker">
                    <legend class="field__label">"Assign to Classes"</legend>
                    <Show
                        when=move || !console.state.with(|s| s.classes.is_empty())
                        fallback=|| view! { <p class="class-picker__empty">"No classes loaded."</p> }
                    >
                        {class_options}
                    </Show>
                    <p class="field__hint">"One mentor record is created per selected class."</p>
                </fieldset>

                <button class="btn btn--primary btn--block" type="submit" disabled=move || !can_submit.get() || console.state.with(|s| s.creating_mentor)>
                    "Create Mentor"
                </button>
            </form>
        </section>
    }
}
