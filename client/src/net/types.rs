//! Wire DTOs for the academic REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's snake_case JSON so serde needs no
//! renames. Session status is kept open-ended: statuses the console does not
//! act on are preserved verbatim instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A class offered on the platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub class_room_id: i64,
    pub title: String,
    #[serde(default)]
    pub enrolled_student_count: Option<i64>,
    #[serde(default)]
    pub class_image: Option<String>,
}

/// Lifecycle status of a tutoring session booking.
///
/// Transitions are decided by the backend; the console only requests them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    Pending,
    Accepted,
    Completed,
    Other(String),
}

impl SessionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Completed => "COMPLETED",
            Self::Other(raw) => raw,
        }
    }

    /// Whether the console offers `transition` from this status.
    pub fn can_transition_to(&self, transition: SessionTransition) -> bool {
        matches!(
            (self, transition),
            (Self::Pending, SessionTransition::Approve) | (Self::Accepted, SessionTransition::Complete)
        )
    }
}

impl From<String> for SessionStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PENDING" => Self::Pending,
            "ACCEPTED" => Self::Accepted,
            "COMPLETED" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// A status change an admin can request for a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionTransition {
    /// `PENDING -> ACCEPTED`
    Approve,
    /// `ACCEPTED -> COMPLETED`
    Complete,
}

impl SessionTransition {
    /// Value sent as the `sessionStatus` query parameter.
    pub fn target_status(self) -> &'static str {
        match self {
            Self::Approve => "ACCEPTED",
            Self::Complete => "COMPLETED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Complete => "Complete",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassroomRef {
    pub title: String,
}

/// A tutoring session booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: i64,
    #[serde(default)]
    pub topic: Option<String>,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub session_status: SessionStatus,
    #[serde(default)]
    pub student: Option<PersonName>,
    #[serde(default)]
    pub mentor: Option<PersonName>,
    #[serde(default)]
    pub classroom: Option<ClassroomRef>,
}

/// Placeholder shown for missing related records.
pub const MISSING: &str = "-";

impl Session {
    pub fn class_label(&self) -> String {
        self.classroom
            .as_ref()
            .map(|c| c.title.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| MISSING.to_owned())
    }

    pub fn student_label(&self) -> String {
        self.student
            .as_ref()
            .map_or_else(|| MISSING.to_owned(), PersonName::full_name)
    }

    pub fn mentor_label(&self) -> String {
        self.mentor
            .as_ref()
            .map_or_else(|| MISSING.to_owned(), PersonName::full_name)
    }
}

/// Body of `POST /academic/classroom`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClassroom {
    pub title: String,
    pub enrolled_student_count: u32,
    pub class_image: String,
}

impl NewClassroom {
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Copy with surrounding whitespace removed from text fields.
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_owned(),
            enrolled_student_count: self.enrolled_student_count,
            class_image: self.class_image.trim().to_owned(),
        }
    }
}

/// Parse a non-negative count from a number input; blank or invalid is 0.
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Editable mentor form state. `session_fee` holds the raw input text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MentorDraft {
    pub clerk_mentor_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub title: String,
    pub session_fee: String,
    pub profession: String,
    pub subject: String,
    pub phone_number: String,
    pub qualification: String,
    pub mentor_image: String,
}

impl MentorDraft {
    /// First unmet precondition for submitting with `class_ids`, if any.
    pub fn missing_requirement(&self, class_ids: &[i64]) -> Option<&'static str> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            Some("Mentor first and last name are required.")
        } else if self.email.trim().is_empty() {
            Some("Mentor email is required.")
        } else if class_ids.is_empty() {
            Some("Select at least one class.")
        } else {
            None
        }
    }

    pub fn can_submit(&self, class_ids: &[i64]) -> bool {
        self.missing_requirement(class_ids).is_none()
    }

    /// Request body for assigning this mentor to `class_room_id`.
    pub fn payload_for(&self, class_room_id: i64) -> MentorPayload {
        MentorPayload {
            clerk_mentor_id: self.clerk_mentor_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            title: self.title.clone(),
            session_fee: parse_fee(&self.session_fee),
            profession: self.profession.clone(),
            subject: self.subject.clone(),
            phone_number: self.phone_number.clone(),
            qualification: self.qualification.clone(),
            mentor_image: self.mentor_image.clone(),
            class_room_id,
        }
    }
}

/// Text fields of `MentorDraft` that the form edits directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MentorField {
    ClerkMentorId,
    FirstName,
    LastName,
    Address,
    Email,
    Title,
    SessionFee,
    Profession,
    Subject,
    PhoneNumber,
    Qualification,
    MentorImage,
}

impl MentorDraft {
    pub fn field(&self, field: MentorField) -> &str {
        match field {
            MentorField::ClerkMentorId => &self.clerk_mentor_id,
            MentorField::FirstName => &self.first_name,
            MentorField::LastName => &self.last_name,
            MentorField::Address => &self.address,
            MentorField::Email => &self.email,
            MentorField::Title => &self.title,
            MentorField::SessionFee => &self.session_fee,
            MentorField::Profession => &self.profession,
            MentorField::Subject => &self.subject,
            MentorField::PhoneNumber => &self.phone_number,
            MentorField::Qualification => &self.qualification,
            MentorField::MentorImage => &self.mentor_image,
        }
    }

    pub fn set_field(&mut self, field: MentorField, value: String) {
        let slot = match field {
            MentorField::ClerkMentorId => &mut self.clerk_mentor_id,
            MentorField::FirstName => &mut self.first_name,
            MentorField::LastName => &mut self.last_name,
            MentorField::Address => &mut self.address,
            MentorField::Email => &mut self.email,
            MentorField::Title => &mut self.title,
            MentorField::SessionFee => &mut self.session_fee,
            MentorField::Profession => &mut self.profession,
            MentorField::Subject => &mut self.subject,
            MentorField::PhoneNumber => &mut self.phone_number,
            MentorField::Qualification => &mut self.qualification,
            MentorField::MentorImage => &mut self.mentor_image,
        };
        *slot = value;
    }
}

/// Coerce fee input to a number; blank, invalid, or non-finite is 0.
pub fn parse_fee(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|fee| fee.is_finite())
        .unwrap_or(0.0)
}

/// Body of `POST /academic/mentor`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MentorPayload {
    pub clerk_mentor_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub title: String,
    pub session_fee: f64,
    pub profession: String,
    pub subject: String,
    pub phone_number: String,
    pub qualification: String,
    pub mentor_image: String,
    pub class_room_id: i64,
}
