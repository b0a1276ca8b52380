//! Admin console data held for the lifetime of the `/admin` page.
//!
//! DESIGN
//! ======
//! Lists are ephemeral copies of backend data. A failed fetch keeps whatever
//! was shown before and raises a visible notice instead of clearing the
//! table or failing silently.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::api::ApiError;
use crate::net::types::{Classroom, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Banner shown above the console panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub classes: Vec<Classroom>,
    pub sessions: Vec<Session>,
    pub loading_sessions: bool,
    /// A class create is awaiting its response.
    pub creating_class: bool,
    /// A mentor batch is awaiting its responses.
    pub creating_mentor: bool,
    pub notice: Option<Notice>,
    class_load_seq: u64,
    session_load_seq: u64,
}

impl AdminState {
    /// Start a class list request; only the newest request may apply.
    pub fn begin_class_load(&mut self) -> u64 {
        self.class_load_seq += 1;
        self.class_load_seq
    }

    /// Apply the response to class request `seq`. Superseded responses are
    /// ignored, including their errors.
    pub fn apply_classrooms(&mut self, seq: u64, result: Result<Vec<Classroom>, ApiError>) {
        if seq != self.class_load_seq {
            return;
        }
        match result {
            Ok(classes) => self.classes = classes,
            Err(err) => self.notice = Some(Notice::error(format!("Could not load classes: {err}"))),
        }
    }

    pub fn begin_session_load(&mut self) -> u64 {
        self.loading_sessions = true;
        self.session_load_seq += 1;
        self.session_load_seq
    }

    pub fn apply_sessions(&mut self, seq: u64, result: Result<Vec<Session>, ApiError>) {
        if seq != self.session_load_seq {
            return;
        }
        self.loading_sessions = false;
        match result {
            Ok(sessions) => self.sessions = sessions,
            Err(err) => self.notice = Some(Notice::error(format!("Could not load sessions: {err}"))),
        }
    }

    /// Claim the class form for one request. `false` while one is in flight.
    pub fn begin_class_submit(&mut self) -> bool {
        !std::mem::replace(&mut self.creating_class, true)
    }

    pub fn end_class_submit(&mut self) {
        self.creating_class = false;
    }

    /// Claim the mentor form for one batch. `false` while one is in flight.
    pub fn begin_mentor_submit(&mut self) -> bool {
        !std::mem::replace(&mut self.creating_mentor, true)
    }

    pub fn end_mentor_submit(&mut self) {
        self.creating_mentor = false;
    }

    pub fn class_title(&self, class_room_id: i64) -> Option<&str> {
        self.classes
            .iter()
            .find(|c| c.class_room_id == class_room_id)
            .map(|c| c.title.as_str())
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Add or remove `class_room_id` from a selection, keeping it duplicate-free.
pub fn toggle_class(selected: &mut Vec<i64>, class_room_id: i64, checked: bool) {
    let present = selected.contains(&class_room_id);
    if checked && !present {
        selected.push(class_room_id);
    } else if !checked && present {
        selected.retain(|id| *id != class_room_id);
    }
}
