//! Table rendering utilities for CLI outputs.
//!
//! Cells may span several lines; column widths grow to fit the widest line.

use super::formatting::{bold, display_width, pad_right, rule};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: "-".to_string(),
        }
    }

    pub fn with_separator(mut self, sep: &str) -> Self {
        self.separator = sep.to_string();
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cells = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .flat_map(|c| c.lines())
                    .map(display_width)
                    .max()
                    .unwrap_or(0);
                col.width.max(display_width(&col.header)).max(cells)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 3;
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_right(&c.header, *w))
            .collect();
        out.push_str(&bold(header.join(" | ").trim_end()));
        out.push('\n');
        out.push_str(&rule(&self.separator, total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<&str>> = (0..self.columns.len())
                .map(|i| row.get(i).map(|c| c.lines().collect()).unwrap_or_default())
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

            for line in 0..height {
                let parts: Vec<String> = cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| pad_right(c.get(line).copied().unwrap_or(""), *w))
                    .collect();
                out.push_str(parts.join(" | ").trim_end());
                out.push('\n');
            }
        }

        out
    }
}
