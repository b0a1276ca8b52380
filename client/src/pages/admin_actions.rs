//! Admin console workflows and their page-side wiring.
//!
//! DESIGN
//! ======
//! The workflows are plain async functions generic over `AcademicApi`, so
//! the request sequencing rules (validation before any request, early stop
//! in mentor batches, transition checks) are unit-tested against a fake
//! backend. `AdminConsole` binds them to page signals and drops results that
//! arrive after the page unmounted.

#[cfg(test)]
#[path = "admin_actions_test.rs"]
mod admin_actions_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use crate::net::api::{AcademicApi, ApiError, HttpGateway};
use crate::net::types::{Classroom, MentorDraft, NewClassroom, Session, SessionTransition};
use crate::state::admin::{AdminState, Notice};
use crate::util::task::{self, AliveFlag};

pub async fn load_classrooms<A: AcademicApi>(api: &A) -> Result<Vec<Classroom>, ApiError> {
    api.list_classrooms().await
}

/// Fetch the session list after a fixed pause.
pub async fn load_sessions<A, S, F>(api: &A, delay: Duration, sleep: S) -> Result<Vec<Session>, ApiError>
where
    A: AcademicApi,
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    if !delay.is_zero() {
        sleep(delay).await;
    }
    api.list_sessions().await
}

/// Create a class. A blank title is rejected without issuing a request.
///
/// # Errors
///
/// `ApiError::Validation` for a blank title, otherwise the gateway error.
pub async fn create_classroom<A: AcademicApi>(api: &A, draft: &NewClassroom) -> Result<(), ApiError> {
    if !draft.can_submit() {
        return Err(ApiError::Validation("Class title is required."));
    }
    api.create_classroom(&draft.normalized()).await
}

/// Result of assigning one mentor to several classes.
///
/// The batch is not atomic: classes in `created` keep their mentor even when
/// a later class fails, and nothing is rolled back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MentorBatchOutcome {
    pub created: Vec<i64>,
    pub failed: Option<(i64, ApiError)>,
    /// Classes never attempted because an earlier request failed.
    pub skipped: Vec<i64>,
}

impl MentorBatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_none()
    }

    pub fn requests_issued(&self) -> usize {
        self.created.len() + usize::from(self.failed.is_some())
    }

    /// Whether the mentor form and class selection are cleared afterwards:
    /// once any request went out, even if it failed.
    pub fn resets_form(&self) -> bool {
        self.requests_issued() > 0
    }

    /// Notice describing the outcome, naming classes via `title`.
    pub fn notice<T>(&self, title: T) -> Notice
    where
        T: Fn(i64) -> String,
    {
        match &self.failed {
            None => Notice::info(format!("Mentor assigned to {} class(es).", self.created.len())),
            Some((class_id, err)) => Notice::error(format!(
                "Mentor created for {} of {} class(es); failed on \"{}\": {err}. {} class(es) not attempted.",
                self.created.len(),
                self.created.len() + 1 + self.skipped.len(),
                title(*class_id),
                self.skipped.len(),
            )),
        }
    }
}

/// Create the mentor once per selected class, in order, stopping at the
/// first failure.
///
/// # Errors
///
/// `ApiError::Validation` when the draft or selection is incomplete; no
/// request is issued in that case. Per-class failures are reported in the
/// returned outcome instead.
pub async fn create_mentor_batch<A: AcademicApi>(
    api: &A,
    draft: &MentorDraft,
    class_ids: &[i64],
) -> Result<MentorBatchOutcome, ApiError> {
    if let Some(reason) = draft.missing_requirement(class_ids) {
        return Err(ApiError::Validation(reason));
    }

    let mut outcome = MentorBatchOutcome::default();
    let mut remaining = class_ids.iter().copied();
    for class_id in remaining.by_ref() {
        match api.create_mentor(&draft.payload_for(class_id)).await {
            Ok(()) => outcome.created.push(class_id),
            Err(err) => {
                log::warn!("mentor create failed for class {class_id}: {err}");
                outcome.failed = Some((class_id, err));
                break;
            }
        }
    }
    outcome.skipped = remaining.collect();
    Ok(outcome)
}

/// Request a status change for `session`, if its current status allows it.
///
/// # Errors
///
/// `ApiError::TransitionNotAllowed` without issuing a request when the
/// console does not offer this transition, otherwise the gateway error.
pub async fn update_session_status<A: AcademicApi>(
    api: &A,
    session: &Session,
    transition: SessionTransition,
) -> Result<(), ApiError> {
    if !session.session_status.can_transition_to(transition) {
        return Err(ApiError::TransitionNotAllowed {
            session_id: session.session_id,
            from: session.session_status.as_str().to_owned(),
            action: transition.label(),
        });
    }
    api.update_session_status(session.session_id, transition).await
}

/// Page-scoped handles shared by the admin panels.
///
/// Each action has a future-returning half that performs the request and
/// applies its result; the public methods hand that future to the browser
/// event loop.
pub struct AdminConsole<A: 'static = HttpGateway> {
    pub state: RwSignal<AdminState>,
    api: StoredValue<A, LocalStorage>,
    alive: StoredValue<AliveFlag>,
    session_delay: Duration,
}

impl<A: 'static> Clone for AdminConsole<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for AdminConsole<A> {}

impl<A> AdminConsole<A>
where
    A: AcademicApi + Clone + 'static,
{
    /// Create handles owned by the current component; late responses are
    /// dropped once it unmounts.
    pub fn new(api: A, session_delay: Duration) -> Self {
        Self {
            state: RwSignal::new(AdminState::default()),
            api: StoredValue::new_local(api),
            alive: StoredValue::new(AliveFlag::for_current_owner()),
            session_delay,
        }
    }

    fn gateway(self) -> Option<A> {
        self.api.try_get_value()
    }

    fn alive_flag(self) -> AliveFlag {
        self.alive.try_get_value().unwrap_or_else(|| {
            let flag = AliveFlag::new();
            flag.clear();
            flag
        })
    }

    /// Write into page state only if the page is still mounted.
    fn commit(self, alive: &AliveFlag, apply: impl FnOnce(&mut AdminState)) {
        if alive.is_alive() {
            let _ = self.state.try_update(apply);
        }
    }

    fn report(self, alive: &AliveFlag, notice: Notice) {
        self.commit(alive, |s| s.notice = Some(notice));
    }

    pub fn refresh_classes(self) {
        task::spawn(self.reload_classes());
    }

    pub fn refresh_sessions(self) {
        task::spawn(self.reload_sessions());
    }

    async fn reload_classes(self) {
        let (Some(api), Some(seq)) = (self.gateway(), self.state.try_update(AdminState::begin_class_load)) else {
            return;
        };
        let alive = self.alive_flag();
        let result = load_classrooms(&api).await;
        if let Err(err) = &result {
            log::warn!("classroom list failed: {err}");
        }
        self.commit(&alive, |s| s.apply_classrooms(seq, result));
    }

    async fn reload_sessions(self) {
        let (Some(api), Some(seq)) = (self.gateway(), self.state.try_update(AdminState::begin_session_load)) else {
            return;
        };
        let alive = self.alive_flag();
        let result = load_sessions(&api, self.session_delay, task::sleep).await;
        if let Err(err) = &result {
            log::warn!("session list failed: {err}");
        }
        self.commit(&alive, |s| s.apply_sessions(seq, result));
    }

    /// Submit the class form; on success clear it and reload classes.
    pub fn submit_class(self, form: RwSignal<NewClassroom>) {
        if let Some(work) = self.create_class(form) {
            task::spawn(work);
        }
    }

    /// Claim the class form and build the request. `None` when the draft is
    /// incomplete or a create is already in flight.
    fn create_class(self, form: RwSignal<NewClassroom>) -> Option<impl Future<Output = ()> + 'static> {
        let draft = form.try_get_untracked()?;
        if !draft.can_submit() {
            return None;
        }
        let api = self.gateway()?;
        if !self.state.try_update(AdminState::begin_class_submit)? {
            return None;
        }
        let alive = self.alive_flag();
        Some(async move {
            let result = create_classroom(&api, &draft).await;
            self.commit(&alive, AdminState::end_class_submit);
            match result {
                Ok(()) => {
                    if alive.is_alive() {
                        let _ = form.try_set(NewClassroom::default());
                    }
                    self.report(&alive, Notice::info(format!("Class \"{}\" created.", draft.title.trim())));
                    if alive.is_alive() {
                        self.reload_classes().await;
                    }
                }
                Err(err) => {
                    log::warn!("class create failed: {err}");
                    self.report(&alive, Notice::error(format!("Could not create class: {err}")));
                }
            }
        })
    }

    /// Submit the mentor form for every selected class.
    ///
    /// The form resets once any request was issued, whether or not every
    /// class succeeded.
    pub fn submit_mentor(self, form: RwSignal<MentorDraft>, selected: RwSignal<Vec<i64>>) {
        if let Some(work) = self.create_mentor(form, selected) {
            task::spawn(work);
        }
    }

    fn create_mentor(
        self,
        form: RwSignal<MentorDraft>,
        selected: RwSignal<Vec<i64>>,
    ) -> Option<impl Future<Output = ()> + 'static> {
        let draft = form.try_get_untracked()?;
        let class_ids = selected.try_get_untracked()?;
        if !draft.can_submit(&class_ids) {
            return None;
        }
        let api = self.gateway()?;
        if !self.state.try_update(AdminState::begin_mentor_submit)? {
            return None;
        }
        let alive = self.alive_flag();
        Some(async move {
            let result = create_mentor_batch(&api, &draft, &class_ids).await;
            self.commit(&alive, AdminState::end_mentor_submit);
            match result {
                Ok(outcome) => {
                    if alive.is_alive() && outcome.resets_form() {
                        let _ = form.try_set(MentorDraft::default());
                        let _ = selected.try_set(Vec::new());
                    }
                    let notice = {
                        let state = self.state.try_get_untracked().unwrap_or_default();
                        outcome.notice(|id| state.class_title(id).map_or_else(|| format!("#{id}"), str::to_owned))
                    };
                    self.report(&alive, notice);
                }
                Err(err) => self.report(&alive, Notice::error(format!("Could not create mentor: {err}"))),
            }
        })
    }

    /// Request `transition` for `session`, then reload the session list.
    pub fn transition(self, session: Session, transition: SessionTransition) {
        if session.session_status.can_transition_to(transition) {
            task::spawn(self.apply_transition(session, transition));
        }
    }

    async fn apply_transition(self, session: Session, transition: SessionTransition) {
        let Some(api) = self.gateway() else {
            return;
        };
        let alive = self.alive_flag();
        match update_session_status(&api, &session, transition).await {
            Ok(()) => {
                if alive.is_alive() {
                    self.reload_sessions().await;
                }
            }
            Err(err) => {
                log::warn!("session {} {} failed: {err}", session.session_id, transition.label());
                self.report(&alive, Notice::error(format!("Could not update session: {err}")));
            }
        }
    }
}
