use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Entry, Hit};
use rusqlite::{Result, Row, params};

/// Insert a new entry and return the id assigned by SQLite.
///
/// Callers are expected to have validated and truncated the fields already.
pub fn append_entry(pool: &mut DbPool, name: &str, duration: i64, reason: &str) -> AppResult<i64> {
    let mut stmt = pool
        .conn
        .prepare_cached("INSERT INTO journal (name, duration, reason) VALUES (?1, ?2, ?3)")?;
    stmt.execute(params![name, duration, reason])?;

    Ok(pool.conn.last_insert_rowid())
}

/// All entries in insertion order.
pub fn list_entries(pool: &mut DbPool) -> AppResult<Vec<Entry>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, name, duration, reason FROM journal ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sum of every duration. `SUM` over no rows is NULL in SQLite, hence the COALESCE.
pub fn total_duration(pool: &mut DbPool) -> AppResult<i64> {
    let total: i64 = pool.conn.query_row(
        "SELECT COALESCE(SUM(duration), 0) FROM journal",
        [],
        |row| row.get(0),
    )?;
    Ok(total)
}

/// Total minutes per name, highest first. Equal totals are ordered by name.
pub fn hitlist(pool: &mut DbPool) -> AppResult<Vec<Hit>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT name, SUM(duration) AS total
         FROM journal
         GROUP BY name
         ORDER BY total DESC, name ASC",
    )?;

    let rows = stmt.query_map([], map_hit)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_entries(pool: &mut DbPool) -> AppResult<i64> {
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM journal", [], |row| row.get(0))?;
    Ok(count)
}

pub fn distinct_names(pool: &mut DbPool) -> AppResult<i64> {
    let count: i64 =
        pool.conn
            .query_row("SELECT COUNT(DISTINCT name) FROM journal", [], |row| {
                row.get(0)
            })?;
    Ok(count)
}

pub fn map_entry(row: &Row) -> Result<Entry> {
    Ok(Entry {
        id: row.get("id")?,
        name: row.get("name")?,
        duration: row.get("duration")?,
        reason: row.get("reason")?,
    })
}

pub fn map_hit(row: &Row) -> Result<Hit> {
    Ok(Hit::new(row.get::<_, String>("name")?, row.get("total")?))
}
