//! Persistence-backed task list store.
//!
//! # Responsibility
//! - Own the ordered in-memory task list the UI layer renders.
//! - Mirror every mutation into the repository as it happens.
//! - Signal registered observers when the backing store changed externally.
//!
//! # Invariants
//! - `list()` reflects insertion order and is never re-sorted.
//! - A failed read leaves the in-memory list untouched.
//! - A failed write keeps the in-memory change; memory and storage converge
//!   again on the next successful write or `load_all`. Callers see the
//!   failure as `StoreError::WriteFailure`.

use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::repo::task_repo::{RepoError, TaskRepository};
use log::{error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Task store error taxonomy.
///
/// `ReadFailure`/`WriteFailure` wrap the repository error they surfaced
/// from; `NotFound` carries the identity that no in-memory entry matched.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    ReadFailure(RepoError),
    WriteFailure(RepoError),
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ReadFailure(err) => write!(f, "failed to load tasks from storage: {err}"),
            Self::WriteFailure(err) => write!(f, "failed to persist task change: {err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::ReadFailure(err) | Self::WriteFailure(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Callback fired when persisted data changed outside this store.
pub type ReloadHook = Box<dyn Fn()>;

/// Single source of truth for the task list, backed by a repository.
///
/// The repository is injected at construction; the store never reaches for
/// a global storage handle. Single-threaded by design: every operation runs
/// to completion on the calling context.
pub struct TaskStore<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
    loaded: bool,
    reload_hooks: Vec<ReloadHook>,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Creates a store over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            tasks: Vec::new(),
            loaded: false,
            reload_hooks: Vec::new(),
        }
    }

    /// Replaces the in-memory list with every persisted task.
    ///
    /// Rows arrive in insertion order. On read failure the in-memory list is
    /// left untouched (no partial overwrite) and the error is logged and
    /// returned.
    pub fn load_all(&mut self) -> StoreResult<&[Task]> {
        match self.repo.list_tasks() {
            Ok(tasks) => {
                self.tasks = tasks;
                self.loaded = true;
                Ok(&self.tasks)
            }
            Err(err) => {
                error!("event=task_load module=store status=error error={err}");
                Err(StoreError::ReadFailure(err))
            }
        }
    }

    /// Appends a new task to the list and persists it.
    ///
    /// Returns the created task including its assigned identity. When the
    /// write fails the appended entry stays in memory and the failure is
    /// returned; the list and storage converge on the next successful write
    /// or `load_all`.
    ///
    /// # Errors
    /// - `Validation` when `title` is empty.
    /// - `WriteFailure` when the insert could not be committed.
    pub fn create(&mut self, title: impl Into<String>) -> StoreResult<Task> {
        let task = Task::new(title)?;
        self.tasks.push(task.clone());

        if let Err(err) = self.repo.create_task(&task) {
            warn!(
                "event=task_create module=store status=error id={} error={err}",
                task.uuid
            );
            return Err(StoreError::WriteFailure(err));
        }

        Ok(task)
    }

    /// Renames the task with the given identity and persists the change.
    ///
    /// # Errors
    /// - `Validation` when `new_title` is empty; no mutation occurs.
    /// - `NotFound` when no entry matches `id`; no mutation occurs.
    /// - `WriteFailure` when the update could not be committed; the renamed
    ///   title stays in memory.
    pub fn rename(&mut self, id: TaskId, new_title: impl Into<String>) -> StoreResult<()> {
        let new_title = new_title.into();
        if new_title.is_empty() {
            return Err(StoreError::Validation(TaskValidationError::EmptyTitle));
        }

        let position = match self.position_of(id) {
            Some(position) => position,
            None => return Err(StoreError::NotFound(id)),
        };

        self.tasks[position].title = new_title;
        let snapshot = self.tasks[position].clone();

        if let Err(err) = self.repo.update_task(&snapshot) {
            warn!("event=task_rename module=store status=error id={id} error={err}");
            return Err(StoreError::WriteFailure(err));
        }

        Ok(())
    }

    /// Removes the task with the given identity from the list and storage.
    ///
    /// Removes exactly one entry; relative order of the rest is preserved.
    ///
    /// # Errors
    /// - `NotFound` when no entry matches `id`; no mutation occurs.
    /// - `WriteFailure` when the delete could not be committed; the removal
    ///   stays in memory.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let position = match self.position_of(id) {
            Some(position) => position,
            None => return Err(StoreError::NotFound(id)),
        };

        self.tasks.remove(position);

        if let Err(err) = self.repo.delete_task(id) {
            warn!("event=task_delete module=store status=error id={id} error={err}");
            return Err(StoreError::WriteFailure(err));
        }

        Ok(())
    }

    /// Returns the current in-memory list without touching storage.
    ///
    /// Every mutation keeps memory and storage in lock-step, so the list is
    /// assumed fresh relative to the backing store (modulo unflushed write
    /// failures, which callers learned about via `WriteFailure`).
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns whether the first successful `load_all` has happened.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Registers a hook fired by `notify_changed`.
    pub fn subscribe(&mut self, hook: impl Fn() + 'static) {
        self.reload_hooks.push(Box::new(hook));
    }

    /// Signals observers that persisted data changed outside this store.
    ///
    /// Callers that mutate the backing store through another handle invoke
    /// this so registered views know to re-run `load_all` and re-render.
    /// The hook only signals; it does not reload on the observer's behalf.
    pub fn notify_changed(&self) {
        for hook in &self.reload_hooks {
            hook();
        }
    }

    fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.uuid == id)
    }
}
