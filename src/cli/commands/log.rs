use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Log a single interruption.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        name,
        duration,
        reason,
    } = cmd
    {
        // validate before touching the database
        let entry = LogLogic::prepare(name, duration, reason, cfg)?;

        let mut pool = DbPool::new(&cfg.database)?;
        LogLogic::apply(&mut pool, &entry)?;
    }

    Ok(())
}
