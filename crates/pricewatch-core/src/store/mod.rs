//! SQLite-backed entity store.
//!
//! One table per entity type, keyed by an auto-incrementing rowid. Every
//! write is a single auto-committed statement; there are no explicit
//! transactions. Lookups of a missing id return `Ok(None)`.

mod client;
mod product;

use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

/// Schema for the product and client tables.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS clients (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        notify_new INTEGER NOT NULL,
        notify_price INTEGER NOT NULL
    );
"#;

/// Entity store over a single SQLite connection.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) a database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(Self { conn })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        tracing::debug!("opened in-memory store");
        Ok(Self { conn })
    }

    /// Create the product and client tables if they are absent.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Open a database file and make sure its schema exists.
    pub fn open_with_schema(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self::open(path)?;
        store.ensure_schema()?;
        Ok(store)
    }

    /// Open an in-memory database with its schema created.
    pub fn in_memory_with_schema() -> Result<Self> {
        let store = Self::open_in_memory()?;
        store.ensure_schema()?;
        Ok(store)
    }

    fn count(&self, table: &str) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();

        assert_eq!(store.product_count().unwrap(), 0);
        assert_eq!(store.client_count().unwrap(), 0);
    }

    #[test]
    fn test_missing_schema_is_an_error() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.products().is_err());
    }
}
