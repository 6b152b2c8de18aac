use crate::db::audit::load_records;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::AuditRecord;
use crate::utils::truncate_chars;
use ansi_term::Colour;
use regex::Regex;

const ANSI_PATTERN: &str = r"\x1B\[[0-9;]*[mK]";
const MAX_OP_WIDTH: usize = 60;

/// Colour of the operation name in the audit listing
fn color_for_operation(op: &str) -> Colour {
    match op {
        "log" => Colour::Green,
        "init" => Colour::RGB(255, 153, 51),
        "vacuum" => Colour::Blue,
        _ => Colour::White,
    }
}

pub struct AuditLogic;

impl AuditLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let records = load_records(pool)?;

        if records.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        print!("{}", Self::render(&records)?);
        Ok(())
    }

    pub fn render(records: &[AuditRecord]) -> AppResult<String> {
        let ansi = Regex::new(ANSI_PATTERN).map_err(|e| AppError::Other(e.to_string()))?;

        let id_w = records
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = records.iter().map(|r| r.date.len()).max().unwrap_or(0);
        let op_w = records
            .iter()
            .map(|r| r.op_target().chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_OP_WIDTH);

        let mut out = String::new();
        for r in records {
            let color = color_for_operation(&r.operation);

            let mut visible = r.op_target();
            if visible.chars().count() > MAX_OP_WIDTH {
                visible = truncate_chars(&visible, MAX_OP_WIDTH - 3);
                visible.push_str("...");
            }

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let shown = ansi.replace_all(&colored, "").chars().count();
            let padding = " ".repeat(op_w.saturating_sub(shown));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                r.id,
                r.date,
                colored,
                padding,
                r.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(out)
    }
}
