//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the list-management API callers use.
//! - Keep UI layers decoupled from storage details.

pub mod task_store;
