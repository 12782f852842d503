use tasklist_core::db::migrations::latest_version;
use tasklist_core::db::open_db_in_memory;
use tasklist_core::{RepoError, SqliteTaskRepository, Task, TaskRepository};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let task = Task::new("first task").unwrap();
    let id = repo.create_task(&task).unwrap();

    let loaded = repo.get_task(id).unwrap().unwrap();
    assert_eq!(loaded.uuid, task.uuid);
    assert_eq!(loaded.title, "first task");
}

#[test]
fn get_missing_task_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    assert!(repo.get_task(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn update_existing_task() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let mut task = Task::new("draft").unwrap();
    repo.create_task(&task).unwrap();

    task.title = "updated title".to_string();
    repo.update_task(&task).unwrap();

    let loaded = repo.get_task(task.uuid).unwrap().unwrap();
    assert_eq!(loaded.title, "updated title");
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let task = Task::new("missing").unwrap();
    let err = repo.update_task(&task).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == task.uuid));
}

#[test]
fn delete_removes_row_and_is_not_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let task = Task::new("short-lived").unwrap();
    repo.create_task(&task).unwrap();

    repo.delete_task(task.uuid).unwrap();
    assert!(repo.get_task(task.uuid).unwrap().is_none());

    // The row is physically gone, so a second delete reports NotFound.
    let err = repo.delete_task(task.uuid).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == task.uuid));
}

#[test]
fn list_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let task_a = Task::new("a").unwrap();
    let task_b = Task::new("b").unwrap();
    let task_c = Task::new("c").unwrap();
    repo.create_task(&task_a).unwrap();
    repo.create_task(&task_b).unwrap();
    repo.create_task(&task_c).unwrap();

    let listed = repo.list_tasks().unwrap();
    let titles: Vec<&str> = listed.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["a", "b", "c"]);
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let mut task = Task::new("valid").unwrap();
    repo.create_task(&task).unwrap();

    task.title = String::new();
    let create_err = repo.create_task(&task).unwrap_err();
    assert!(matches!(create_err, RepoError::Validation(_)));

    let update_err = repo.update_task(&task).unwrap_err();
    assert!(matches!(update_err, RepoError::Validation(_)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteTaskRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_tasks_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("tasks"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE tasks (
            uuid TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "tasks",
            column: "seq"
        })
    ));
}
