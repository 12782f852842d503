//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tasklist_core::db::open_db_in_memory;
use tasklist_core::{SqliteTaskRepository, TaskStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("tasklist_core version={}", tasklist_core::core_version());

    // Run the whole store lifecycle against a throwaway in-memory database.
    let conn = open_db_in_memory()?;
    let repo = SqliteTaskRepository::try_new(&conn)?;
    let mut store = TaskStore::new(repo);

    store.load_all()?;
    let first = store.create("buy milk")?;
    store.create("walk the dog")?;
    store.rename(first.uuid, "buy oat milk")?;

    for task in store.list() {
        println!("task title={}", task.title);
    }

    store.delete(first.uuid)?;
    println!("tasks remaining={}", store.list().len());

    Ok(())
}
