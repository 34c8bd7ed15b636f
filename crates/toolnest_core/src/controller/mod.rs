//! Use-case controllers orchestrating model and repository.
//!
//! # Responsibility
//! - Expose the operations presentation bindings call in response to user
//!   events.
//! - Keep bindings decoupled from storage and serialization details.

pub mod task_list;
