use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::audit::ttlog;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        run_maintenance(&pool, *check, *vacuum)?;
    }

    Ok(())
}

fn run_maintenance(pool: &DbPool, check: bool, vacuum: bool) -> AppResult<()> {
    //
    // 2) CHECK
    //
    if check {
        println!("{}▶ Running integrity check…{}", CYAN, RESET);

        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
        } else {
            println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
        }
    }

    //
    // 3) VACUUM
    //
    if vacuum {
        println!("{}▶ Running VACUUM…{}", CYAN, RESET);

        pool.conn.execute_batch("VACUUM;")?;

        if let Err(e) = ttlog(&pool.conn, "vacuum", "", "Database vacuumed") {
            warning(format!("Failed to write internal log: {}", e));
        }

        println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
    }

    Ok(())
}
