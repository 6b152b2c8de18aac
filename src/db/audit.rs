use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::AuditRecord;
use chrono::Local;
use rusqlite::{Connection, params};

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Every audit row, oldest first.
pub fn load_records(pool: &mut DbPool) -> AppResult<Vec<AuditRecord>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, '') AS target, message
         FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(AuditRecord {
            id: row.get("id")?,
            date: row.get("date")?,
            operation: row.get("operation")?,
            target: row.get("target")?,
            message: row.get("message")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
