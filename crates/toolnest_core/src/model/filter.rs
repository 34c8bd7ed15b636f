//! Display filter over the task collection.
//!
//! # Responsibility
//! - Represent the three view filters as a closed enum.
//! - Provide the selection predicate and the label/parse pair used by
//!   presentation bindings.
//!
//! # Invariants
//! - The filter is transient view state; it is never persisted.
//! - `All` is the default after controller construction.

use crate::model::task::Task;

/// Display-only predicate selecting which tasks are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    /// Every task, in insertion order.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks only.
    Completed,
}

impl TaskFilter {
    /// Returns whether `task` passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Stable lowercase label for display and argument parsing.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parses a label case-insensitively; `None` for anything outside the
    /// closed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}
