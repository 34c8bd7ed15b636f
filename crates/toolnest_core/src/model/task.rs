//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted under the `tasks` key.
//! - Own monotonic id generation for new tasks.
//!
//! # Invariants
//! - `id` is immutable and unique within a collection for its lifetime.
//! - `text` is non-empty and trimmed at creation; it is not re-validated
//!   afterwards.
//! - Generated ids are strictly increasing within one generator, even for
//!   several tasks created inside the same clock millisecond.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for one task.
///
/// Epoch-millisecond derived, kept as a type alias to make semantic intent
/// explicit in signatures.
pub type TaskId = i64;

/// A user-entered to-do item with completion state.
///
/// Wire shape is pinned to `{"id": …, "text": …, "completed": …}`; the
/// persisted `tasks` value is a JSON array of these records in insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id, assigned once at creation.
    pub id: TaskId,
    /// Trimmed, non-empty description.
    pub text: String,
    /// Completion flag flipped by toggle operations.
    pub completed: bool,
}

impl Task {
    /// Creates an uncompleted task.
    ///
    /// Callers are expected to pass already-trimmed, non-empty text; the
    /// controller enforces that before construction.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Issues unique, monotonically increasing task ids.
///
/// Ids are derived from the wall clock (epoch milliseconds) but never
/// repeat or regress: each id is `max(now_ms, last_issued + 1)`. Seeding
/// from the loaded collection keeps ids unique across restarts even when
/// the clock stepped backwards in between.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskIdGenerator {
    last_issued: TaskId,
}

impl TaskIdGenerator {
    /// Creates a generator whose next id is guaranteed to exceed every id
    /// already present in `tasks`.
    pub fn seeded_from(tasks: &[Task]) -> Self {
        Self {
            last_issued: tasks.iter().map(|task| task.id).max().unwrap_or(0),
        }
    }

    /// Returns the next unique id.
    pub fn next_id(&mut self) -> TaskId {
        self.last_issued = now_epoch_ms().max(self.last_issued + 1);
        self.last_issued
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
