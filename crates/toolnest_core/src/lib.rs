//! Core domain logic for ToolNest.
//! This crate is the single source of truth for business invariants.

pub mod catalog;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod theme;

pub use catalog::{
    fetch_products, search_products, CatalogError, CatalogResult, Product, DEFAULT_PRODUCTS_URL,
};
pub use controller::task_list::TaskListController;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging};
pub use model::filter::TaskFilter;
pub use model::task::{Task, TaskId, TaskIdGenerator};
pub use repo::task_repo::{StoreTaskRepository, TaskRepository, TASKS_KEY};
pub use store::{KeyValueStore, MemoryStore, SqliteKeyValueStore};
pub use theme::{ThemePreference, THEME_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
