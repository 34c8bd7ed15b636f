//! Persistent key-value store shim.
//!
//! # Responsibility
//! - Define the durable string-to-string mapping the repositories build on.
//! - Keep storage-failure policy in one place: reads and writes never fail
//!   from the caller's perspective.
//!
//! # Invariants
//! - `read` returns `None` both on absence and on inaccessible storage.
//! - `write` is best-effort; a failed write leaves the previous durable
//!   value in place and is reported via a warning log, never to the caller.
//! - There is exactly one writer at a time by construction; the store does
//!   not add locking of its own.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteKeyValueStore;

/// Durable local key-value storage. Survives restarts when backed by a
/// database file; degrades to session-only when it is not.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` when the key is absent
    /// or the backing storage cannot be reached.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any prior value. Failures are
    /// swallowed after being logged.
    fn write(&mut self, key: &str, value: &str);
}
