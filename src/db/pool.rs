//! SQLite connection wrapper (one connection per CLI invocation).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Owns the single connection to the journal database.
/// The connection is closed when the pool is dropped.
pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database at `path` and make sure the schema exists.
    /// Missing parent directories are created.
    pub fn new(path: &str) -> AppResult<Self> {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
