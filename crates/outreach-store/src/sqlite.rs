use crate::backend::SlotBackend;
use crate::error::Result;
use crate::{migrate, paths};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Slots stored as rows of a key-value table in a single SQLite file.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Creates the file (and its directory) when missing and brings the schema up to date.
    pub fn open(path: &Path) -> Result<Self> {
        paths::ensure_parent_dir(path)?;
        let conn = Connection::open(path)?;
        paths::restrict_file_permissions(path)?;
        Self::prepare(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::prepare(Connection::open_in_memory()?)
    }

    fn prepare(mut conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "busy_timeout", 2000)?;
        migrate::run_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl SlotBackend for SqliteBackend {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE name = ?1;",
                [slot],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO slots (name, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at;",
            params![slot, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }
}
