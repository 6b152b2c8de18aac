use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::queries::hitlist;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hitlist { .. } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let hits = hitlist(&mut pool)?;
        print!("{}", ReportLogic::render_hitlist(&hits));
    }
    Ok(())
}
