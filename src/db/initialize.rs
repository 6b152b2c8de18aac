use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `journal` and `log` tables if they are missing.
/// There are no migrations: an existing table is used as is.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS journal (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT NOT NULL,
            duration  INTEGER NOT NULL CHECK(duration > 0),
            reason    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_journal_name ON journal(name);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

