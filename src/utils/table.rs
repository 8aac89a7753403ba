//! Table rendering utilities for CLI outputs.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Display width of a cell, ignoring any ANSI escapes it carries.
pub fn display_width(s: &str) -> usize {
    // Cheap path: most cells carry no escapes at all.
    if !s.contains('\x1b') {
        return UnicodeWidthStr::width(s);
    }

    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    UnicodeWidthStr::width(re.replace_all(s, "").as_ref())
}

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with per-column widths fitted to the widest cell.
    pub fn render(&self, separator_char: &str) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(display_width(cell));
                }
            }
        }

        let mut out = String::new();

        for (i, header) in self.headers.iter().enumerate() {
            out.push_str(&pad_cell(header, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        let sep = if separator_char.is_empty() { "-" } else { separator_char };
        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&sep.repeat(total.max(1)));
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    out.push_str(&pad_cell(cell, widths[i]));
                    out.push_str("  ");
                }
            }
            out.push('\n');
        }

        out
    }
}

/// Left-pad with spaces to `width` display columns; ANSI escapes inside the
/// cell contribute zero width.
fn pad_cell(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
