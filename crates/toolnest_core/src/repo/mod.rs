//! Repository layer between domain state and the persistent store.
//!
//! # Responsibility
//! - Define the collection-level persistence contract the controller uses.
//! - Isolate JSON payload details from business orchestration.
//!
//! # Invariants
//! - Every mutation round-trips the entire collection; repositories never
//!   diff or patch persisted state.
//! - Read paths fail open to an empty collection instead of erroring.

pub mod task_repo;
