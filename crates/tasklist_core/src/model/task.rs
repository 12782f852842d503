//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical persisted record for the task list.
//! - Keep identity assignment and record validation in one place.
//!
//! # Invariants
//! - `uuid` is stable, assigned at creation, and never reused for another task.
//! - `title` is non-empty for every validated task.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a persisted task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation failures for task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty.
    EmptyTitle,
    /// The identity is the nil UUID.
    NilUuid,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::NilUuid => write!(f, "task uuid must not be nil"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical persisted record for one entry of the task list.
///
/// The model intentionally stays minimal: identity plus user-visible text.
/// Insertion order is a storage concern and is not carried on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for rename/delete addressing.
    pub uuid: TaskId,
    /// User-visible text. Mutable via rename, never empty.
    pub title: String,
}

impl Task {
    /// Creates a new task with a generated stable ID.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyTitle` when `title` is empty.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by load paths where identity already exists in storage.
    ///
    /// # Errors
    /// - `TaskValidationError::NilUuid` when `uuid` is nil.
    /// - `TaskValidationError::EmptyTitle` when `title` is empty.
    pub fn with_id(uuid: TaskId, title: impl Into<String>) -> Result<Self, TaskValidationError> {
        let task = Self {
            uuid,
            title: title.into(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record invariants without mutating the record.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.uuid.is_nil() {
            return Err(TaskValidationError::NilUuid);
        }
        if self.title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}
