//! Database schema and connection management

use crate::error::{Result, StorageContext};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Database connection manager for player rows
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open (creating if absent) the database file and ensure the table exists
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %db_path.display(), "Opening player database");
        let conn = Connection::open(db_path).on("DB open")?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create an in-memory database with the schema applied
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().on("DB open")?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS player (id INTEGER PRIMARY KEY, name TEXT, score INTEGER)",
                [],
            )
            .on("create table player")?;
        Ok(())
    }
}
