// SQLite persistence layer: a single key-value table holding JSON blobs.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::store::BlobStore;

/// SQLite-backed key-value storage for serialized application state.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) a SQLite database at `path` and ensure the state
    /// table exists. Pass `":memory:"` for an ephemeral in-memory database
    /// (useful for tests).
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {path}"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
        .context("failed to set database pragmas")?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS app_state (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )
        .context("failed to create database schema")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("database mutex poisoned")
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn save_state(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn();
        conn.execute(
            "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .context("failed to save state")?;
        Ok(())
    }

    /// Load the value stored under `key`. Returns `None` if the key does not
    /// exist.
    pub fn load_state(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .context("failed to query app state")
    }

    /// Delete the value stored under `key`. Returns whether a row existed.
    pub fn clear_state(&self, key: &str) -> Result<bool> {
        let conn = self.conn();
        let removed = conn
            .execute("DELETE FROM app_state WHERE key = ?1", params![key])
            .context("failed to clear state")?;
        Ok(removed > 0)
    }
}

impl BlobStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.load_state(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.save_state(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> Database {
        Database::open(":memory:").unwrap()
    }

    #[test]
    fn open_creates_state_table() {
        let db = test_db();
        let conn = db.conn();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'app_state'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn load_state_returns_none_for_missing_key() {
        let db = test_db();
        assert!(db.load_state("nonexistent").unwrap().is_none());
    }

    #[test]
    fn save_state_overwrites_previous_value() {
        let db = test_db();
        db.save_state("key", "1").unwrap();
        db.save_state("key", "2").unwrap();
        assert_eq!(db.load_state("key").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn clear_state_removes_key() {
        let db = test_db();
        db.save_state("key", "{}").unwrap();
        assert!(db.clear_state("key").unwrap());
        assert!(!db.clear_state("key").unwrap());
        assert!(db.load_state("key").unwrap().is_none());
    }

    #[test]
    fn blob_store_impl_uses_state_table() {
        let db = test_db();
        db.put("k", "v").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(db.load_state("k").unwrap().as_deref(), Some("v"));
    }
}
