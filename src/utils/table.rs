//! Tab-aligned table rendering for CLI outputs.
//!
//! Cells are separated by tab characters. Every column except the last one of
//! a row is padded with tabs up to a common width, assuming a terminal that
//! expands a tab to the next multiple of `tab_width`.
//! Unlike Go's `text/tabwriter`, a cell that exactly fills a tab stop still
//! gets a separating tab instead of running into the next column.

use unicode_width::UnicodeWidthStr;

pub struct TabWriter {
    pub min_width: usize,
    pub tab_width: usize,
    pub padding: usize,
    pub rows: Vec<Vec<String>>,
}

impl TabWriter {
    pub fn new(min_width: usize, tab_width: usize, padding: usize) -> Self {
        Self {
            min_width,
            tab_width: tab_width.max(1),
            padding,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of every padded column, rounded up to a multiple of `tab_width`.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();

        for row in &self.rows {
            // the last cell of a row is never padded and does not count
            let padded = row.len().saturating_sub(1);
            for (i, cell) in row.iter().take(padded).enumerate() {
                let text_w = UnicodeWidthStr::width(cell.as_str());
                // at least one column of gap, or the tab would not move the cursor
                let w = (text_w + self.padding).max(text_w + 1).max(self.min_width);
                match widths.get_mut(i) {
                    Some(current) => *current = (*current).max(w),
                    None => widths.push(w),
                }
            }
        }

        widths
            .into_iter()
            .map(|w| w.div_ceil(self.tab_width) * self.tab_width)
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                out.push_str(cell);
                if i == last {
                    break;
                }
                let text_w = UnicodeWidthStr::width(cell.as_str());
                let gap = widths[i].saturating_sub(text_w);
                let tabs = gap.div_ceil(self.tab_width);
                out.push_str(&"\t".repeat(tabs));
            }
            out.push('\n');
        }

        out
    }
}
