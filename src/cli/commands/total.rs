use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::queries::total_duration;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Total { .. } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let total = total_duration(&mut pool)?;
        print!("{}", ReportLogic::render_total(total));
    }
    Ok(())
}
