use tasklist_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn new_assigns_fresh_identity() {
    let task = Task::new("hello").unwrap();

    assert!(!task.uuid.is_nil());
    assert_eq!(task.title, "hello");

    let other = Task::new("hello").unwrap();
    assert_ne!(task.uuid, other.uuid);
}

#[test]
fn new_rejects_empty_title() {
    let err = Task::new("").unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyTitle);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "invalid").unwrap_err();
    assert_eq!(err, TaskValidationError::NilUuid);
}

#[test]
fn whitespace_only_title_is_accepted() {
    // Only the empty string is rejected; trimming is the caller's concern.
    let task = Task::new(" ").unwrap();
    assert_eq!(task.title, " ");
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::with_id(task_id, "ship release").unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["uuid"], task_id.to_string());
    assert_eq!(json["title"], "ship release");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
