use crate::config::Config;
use crate::db::audit::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::append_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{MAX_NAME_LENGTH, MAX_REASON_LENGTH};
use crate::ui::messages::warning;
use crate::utils::truncate_chars;

/// A validated interruption, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub duration: i64,
    pub reason: String,
}

pub struct LogLogic;

impl LogLogic {
    /// Parse the raw duration argument as a base-10 number of minutes.
    pub fn parse_duration(raw: &str) -> AppResult<i64> {
        raw.parse::<i64>()
            .map_err(|_| AppError::InvalidDuration(raw.to_string()))
    }

    /// Duration must be > 0 and, when a limit is given, not above it.
    pub fn check_duration(duration: i64, limit: Option<i64>) -> AppResult<i64> {
        if duration <= 0 {
            return Err(AppError::NonPositiveDuration(duration));
        }
        match limit {
            Some(max) if duration > max => Err(AppError::DurationOutOfRange {
                value: duration,
                max,
            }),
            _ => Ok(duration),
        }
    }

    /// Validate the three `log` arguments and truncate the text fields.
    pub fn prepare(name: &str, duration: &str, reason: &str, cfg: &Config) -> AppResult<NewEntry> {
        let duration = Self::parse_duration(duration)?;
        let duration = Self::check_duration(duration, cfg.duration_limit())?;

        Ok(NewEntry {
            name: truncate_chars(name, MAX_NAME_LENGTH),
            duration,
            reason: truncate_chars(reason, MAX_REASON_LENGTH),
        })
    }

    /// Store the entry and record the operation in the audit table.
    /// Returns the id of the new entry.
    pub fn apply(pool: &mut DbPool, entry: &NewEntry) -> AppResult<i64> {
        let id = append_entry(pool, &entry.name, entry.duration, &entry.reason)?;

        // audit is best effort: the entry is already stored
        if let Err(e) = ttlog(
            &pool.conn,
            "log",
            &entry.name,
            &format!("#{} {} min", id, entry.duration),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(id)
    }
}
