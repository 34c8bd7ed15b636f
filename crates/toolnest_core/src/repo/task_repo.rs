//! Task repository contract and store-backed implementation.
//!
//! # Responsibility
//! - Round-trip the full task collection through the persistent store as
//!   one JSON array under the `tasks` key.
//! - Keep serialization details away from the controller.
//!
//! # Invariants
//! - `load` fails open: absence and malformed payloads both yield an empty
//!   collection, never an error.
//! - `save` replaces the whole persisted value; there is no partial-update
//!   path.

use crate::model::task::Task;
use crate::store::KeyValueStore;
use log::warn;

/// Store key holding the serialized task collection.
pub const TASKS_KEY: &str = "tasks";

/// Persistence boundary for the task collection.
pub trait TaskRepository {
    /// Loads the persisted collection, or an empty one when nothing usable
    /// is stored.
    fn load(&self) -> Vec<Task>;

    /// Persists the full collection, replacing any prior value.
    fn save(&mut self, tasks: &[Task]);
}

/// [`TaskRepository`] over any [`KeyValueStore`].
pub struct StoreTaskRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreTaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> TaskRepository for StoreTaskRepository<S> {
    fn load(&self) -> Vec<Task> {
        let Some(raw) = self.store.read(TASKS_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                // The payload itself stays out of the log; it is user data.
                warn!(
                    "event=tasks_load module=repo status=error error_code=malformed_payload payload_len={} error={err}",
                    raw.len()
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, tasks: &[Task]) {
        match serde_json::to_string(tasks) {
            Ok(json) => self.store.write(TASKS_KEY, &json),
            Err(err) => {
                warn!("event=tasks_save module=repo status=error error={err}");
            }
        }
    }
}
