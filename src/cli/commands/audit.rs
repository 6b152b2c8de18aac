use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::AuditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Audit) {
        let mut pool = DbPool::new(&cfg.database)?;
        AuditLogic::print_log(&mut pool)?;
    }

    Ok(())
}
