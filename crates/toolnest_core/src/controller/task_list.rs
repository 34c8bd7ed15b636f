//! Task list controller.
//!
//! # Responsibility
//! - Own the in-memory task collection and the transient display filter.
//! - Apply add/toggle/delete mutations with persistence as an explicit
//!   postcondition of each one.
//! - Derive the filtered view handed to presentation bindings.
//!
//! # Invariants
//! - The collection is loaded exactly once, at construction.
//! - Every successful mutation persists the full collection before
//!   returning; no-ops (empty input, unknown id) neither mutate nor
//!   persist.
//! - Insertion order is display order; filtering never reorders.

use crate::model::filter::TaskFilter;
use crate::model::task::{Task, TaskId, TaskIdGenerator};
use crate::repo::task_repo::TaskRepository;

/// State machine over the task collection.
///
/// The controller is the single owner of its collection and filter;
/// presentation bindings hold no authoritative state and interact only
/// through the methods below.
pub struct TaskListController<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
    filter: TaskFilter,
    id_generator: TaskIdGenerator,
}

impl<R: TaskRepository> TaskListController<R> {
    /// Loads the persisted collection once and takes ownership of it.
    ///
    /// A store with no usable `tasks` payload yields an empty list; the
    /// filter starts at [`TaskFilter::All`].
    pub fn new(repo: R) -> Self {
        let tasks = repo.load();
        let id_generator = TaskIdGenerator::seeded_from(&tasks);
        Self {
            repo,
            tasks,
            filter: TaskFilter::default(),
            id_generator,
        }
    }

    /// Appends a new uncompleted task from raw user input.
    ///
    /// Input is trimmed first; whitespace-only input is rejected silently
    /// (`None`, nothing mutated or persisted). Duplicate text is allowed;
    /// uniqueness applies to ids only.
    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.id_generator.next_id();
        self.tasks.push(Task::new(id, text));
        self.repo.save(&self.tasks);
        Some(id)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `false` as a no-op (not an error) when no task has that id.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.repo.save(&self.tasks);
                true
            }
            None => false,
        }
    }

    /// Removes the task with `id`.
    ///
    /// Returns `false` as a no-op (not an error) when no task has that id.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }

        self.repo.save(&self.tasks);
        true
    }

    /// Switches the display filter. Pure view-state change: the collection
    /// is neither mutated nor re-persisted.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Currently active display filter.
    pub fn current_filter(&self) -> TaskFilter {
        self.filter
    }

    /// Tasks passing the current filter, in insertion order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .collect()
    }

    /// The full collection regardless of filter, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}
