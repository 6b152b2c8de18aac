//! Text rendering of the `list`, `total` and `hitlist` reports.

use crate::models::{Entry, Hit};
use crate::utils::TabWriter;

const MIN_CELL_WIDTH: usize = 4;
const TAB_WIDTH: usize = 8;
const LIST_PADDING: usize = 0;
const HITLIST_PADDING: usize = 2;

pub struct ReportLogic;

impl ReportLogic {
    /// One line per entry: name, duration and the quoted reason.
    pub fn render_list(entries: &[Entry]) -> String {
        let mut table = TabWriter::new(MIN_CELL_WIDTH, TAB_WIDTH, LIST_PADDING);
        for e in entries {
            table.add_row(vec![
                e.name.clone(),
                e.duration.to_string(),
                format!("\"{}\"", e.reason),
            ]);
        }
        table.render()
    }

    pub fn render_total(total: i64) -> String {
        format!("{}\n", total)
    }

    pub fn render_hitlist(hits: &[Hit]) -> String {
        let mut table = TabWriter::new(MIN_CELL_WIDTH, TAB_WIDTH, HITLIST_PADDING);
        for h in hits {
            table.add_row(vec![h.name.clone(), h.duration.to_string()]);
        }
        table.render()
    }
}
