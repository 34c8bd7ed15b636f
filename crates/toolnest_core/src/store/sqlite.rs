//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Map the [`KeyValueStore`] contract onto the migrated `kv` table.
//! - Enforce the swallow-and-log policy for storage failures.
//!
//! # Invariants
//! - Construction rejects connections whose schema was never migrated.
//! - One row per key; writes replace the full prior value.

use crate::db::{DbError, DbResult};
use crate::store::KeyValueStore;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable store over a migrated SQLite connection.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Constructs a store over a connection returned by
    /// [`crate::db::open_db`] or [`crate::db::open_db_in_memory`].
    ///
    /// # Errors
    /// - [`DbError::SchemaNotReady`] when the `kv` table is absent, which
    ///   means migrations never ran on this connection.
    pub fn try_new(conn: &'conn Connection) -> DbResult<Self> {
        if !table_exists(conn, "kv")? {
            return Err(DbError::SchemaNotReady { table: "kv" });
        }
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn read(&self, key: &str) -> Option<String> {
        let row = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional();

        match row {
            Ok(value) => value,
            Err(err) => {
                warn!("event=kv_read module=store status=error key={key} error={err}");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        let outcome = self.conn.execute(
            "INSERT INTO kv (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        );

        if let Err(err) = outcome {
            warn!("event=kv_write module=store status=error key={key} error={err}");
        }
    }
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
