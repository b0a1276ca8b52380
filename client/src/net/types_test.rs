use super::*;
use serde_json::json;

fn session_json(status: &str) -> serde_json::Value {
    json!({
        "session_id": 7,
        "topic": "Ownership",
        "start_time": "2024-01-01T10:00:00Z",
        "end_time": "2024-01-01T11:30:00Z",
        "session_status": status,
        "student": { "first_name": "Lin", "last_name": "Chen" },
        "mentor": null,
        "classroom": { "title": "Rust 101" }
    })
}

#[test]
fn session_deserializes_known_status() {
    let session: Session = serde_json::from_value(session_json("PENDING")).unwrap();
    assert_eq!(session.session_status, SessionStatus::Pending);
    assert_eq!(session.class_label(), "Rust 101");
    assert_eq!(session.student_label(), "Lin Chen");
    assert_eq!(session.mentor_label(), MISSING);
}

#[test]
fn session_preserves_unknown_status() {
    let session: Session = serde_json::from_value(session_json("CANCELLED")).unwrap();
    assert_eq!(session.session_status, SessionStatus::Other("CANCELLED".to_owned()));
    assert_eq!(session.session_status.as_str(), "CANCELLED");
    let back = serde_json::to_value(&session).unwrap();
    assert_eq!(back["session_status"], "CANCELLED");
}

#[test]
fn session_tolerates_missing_optional_fields() {
    let session: Session = serde_json::from_value(json!({
        "session_id": 1,
        "start_time": "2024-01-01T10:00:00Z",
        "session_status": "ACCEPTED"
    }))
    .unwrap();
    assert_eq!(session.end_time, None);
    assert_eq!(session.class_label(), MISSING);
    assert_eq!(session.student_label(), MISSING);
}

#[test]
fn transitions_follow_status() {
    assert!(SessionStatus::Pending.can_transition_to(SessionTransition::Approve));
    assert!(!SessionStatus::Pending.can_transition_to(SessionTransition::Complete));
    assert!(SessionStatus::Accepted.can_transition_to(SessionTransition::Complete));
    assert!(!SessionStatus::Accepted.can_transition_to(SessionTransition::Approve));
    assert!(!SessionStatus::Completed.can_transition_to(SessionTransition::Approve));
    assert!(!SessionStatus::Completed.can_transition_to(SessionTransition::Complete));
    assert!(!SessionStatus::Other("PAID".to_owned()).can_transition_to(SessionTransition::Approve));
}

#[test]
fn transition_query_values() {
    assert_eq!(SessionTransition::Approve.target_status(), "ACCEPTED");
    assert_eq!(SessionTransition::Complete.target_status(), "COMPLETED");
}

#[test]
fn classroom_accepts_sparse_records() {
    let classroom: Classroom = serde_json::from_value(json!({ "class_room_id": 3, "title": "Go" })).unwrap();
    assert_eq!(classroom.enrolled_student_count, None);
    assert_eq!(classroom.class_image, None);
}

#[test]
fn new_classroom_requires_title() {
    let mut draft = NewClassroom::default();
    assert!(!draft.can_submit());
    draft.title = "   ".to_owned();
    assert!(!draft.can_submit());
    draft.title = " AWS DevOps ".to_owned();
    assert!(draft.can_submit());
    assert_eq!(draft.normalized().title, "AWS DevOps");
}

#[test]
fn new_classroom_serializes_backend_fields() {
    let draft = NewClassroom {
        title: "Rust".to_owned(),
        enrolled_student_count: 4,
        class_image: "https://img/rust.webp".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        json!({ "title": "Rust", "enrolled_student_count": 4, "class_image": "https://img/rust.webp" })
    );
}

#[test]
fn parse_count_defaults_to_zero() {
    assert_eq!(parse_count("12"), 12);
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("-3"), 0);
    assert_eq!(parse_count("abc"), 0);
}

#[test]
fn parse_fee_coerces_to_number() {
    assert!((parse_fee("1500.5") - 1500.5).abs() < f64::EPSILON);
    assert!(parse_fee("").abs() < f64::EPSILON);
    assert!(parse_fee("ten").abs() < f64::EPSILON);
    assert!(parse_fee("inf").abs() < f64::EPSILON);
}

fn complete_draft() -> MentorDraft {
    MentorDraft {
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: "grace@example.com".to_owned(),
        session_fee: "2500".to_owned(),
        ..MentorDraft::default()
    }
}

#[test]
fn mentor_draft_requirements() {
    let draft = complete_draft();
    assert!(draft.can_submit(&[1]));
    assert_eq!(draft.missing_requirement(&[]), Some("Select at least one class."));

    let no_last = MentorDraft { last_name: " ".to_owned(), ..complete_draft() };
    assert_eq!(no_last.missing_requirement(&[1]), Some("Mentor first and last name are required."));

    let no_email = MentorDraft { email: String::new(), ..complete_draft() };
    assert_eq!(no_email.missing_requirement(&[1]), Some("Mentor email is required."));
}

#[test]
fn mentor_payload_carries_class_and_numeric_fee() {
    let payload = complete_draft().payload_for(42);
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["class_room_id"], 42);
    assert_eq!(value["session_fee"], 2500.0);
    assert_eq!(value["first_name"], "Grace");
}

#[test]
fn mentor_fields_read_back_what_was_set() {
    let mut draft = MentorDraft::default();
    draft.set_field(MentorField::Email, "x@y.z".to_owned());
    draft.set_field(MentorField::SessionFee, "99".to_owned());
    assert_eq!(draft.field(MentorField::Email), "x@y.z");
    assert_eq!(draft.email, "x@y.z");
    assert_eq!(draft.field(MentorField::SessionFee), "99");
    assert_eq!(draft.field(MentorField::Address), "");
}
