use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, placeholder};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) ENTRIES
    //
    let count = queries::count_entries(pool)?;
    let names = queries::distinct_names(pool)?;
    let total = queries::total_duration(pool)?;

    println!("{}• Entries:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);
    println!("{}• Interrupters:{} {}{}{}", CYAN, RESET, GREEN, names, RESET);
    println!("{}• Total minutes:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);

    //
    // 3) TOP INTERRUPTER
    //
    let top = queries::hitlist(pool)?
        .into_iter()
        .next()
        .map(|h| format!("{} ({} min)", h.name, h.duration))
        .unwrap_or_else(placeholder);
    println!("{}• Top interrupter:{} {}", CYAN, RESET, top);

    println!();
    Ok(())
}
