use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::queries::list_entries;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { .. } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let entries = list_entries(&mut pool)?;
        print!("{}", ReportLogic::render_list(&entries));
    }
    Ok(())
}
