//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its id semantics.
//! - Define the closed set of display filters.
//!
//! # Invariants
//! - Every task is identified by a stable integer `TaskId`.
//! - Filters are view state only and never reach persistence.

pub mod filter;
pub mod task;
