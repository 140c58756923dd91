//! Table rendering for console panels.

use crate::utils::colors::visible_width;

/// A plain left-aligned text table. Column widths follow the widest
/// visible content; ANSI sequences inside cells do not count toward the
/// width.
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(visible_width(cell));
                }
            }
        }

        let mut out = String::new();

        // Header
        for (i, header) in self.headers.iter().enumerate() {
            out.push_str(&pad_visible(header, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        // Separator
        for width in &widths {
            out.push_str(&"-".repeat(*width));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = widths.get(i).copied().unwrap_or(0);
                out.push_str(&pad_visible(cell, width));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}

fn pad_visible(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
