//! Table - schemaless tabular records and their text rendering

use serde::{Deserialize, Serialize};

/// Cell text used for blank or missing values
const MISSING_CELL: &str = "NaN";

/// Column separator in rendered tables
const COLUMN_GAP: &str = "  ";

/// Ordered headers plus ordered rows of string cells
///
/// No schema is enforced: rows may be shorter or longer than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Build from string literals (handy for fixtures)
    pub fn from_rows<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append another table's rows after ours, keeping order and duplicates.
    /// An empty-headed table adopts the incoming headers.
    pub fn append(&mut self, other: Table) {
        if self.headers.is_empty() {
            self.headers = other.headers;
        }
        self.rows.extend(other.rows);
    }

    /// Full text rendering, no size limit
    pub fn render(&self) -> String {
        self.render_capped(0)
    }

    /// Text rendering limited to `max_chars` (0 = unlimited).
    ///
    /// Layout: a row-number index column, every column right-aligned to its
    /// widest cell, two spaces between columns. Truncation happens on whole
    /// rows and is followed by a note with the number of omitted rows.
    pub fn render_capped(&self, max_chars: usize) -> String {
        if self.rows.is_empty() {
            return self.render_empty();
        }

        let column_count = self
            .rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(self.headers.len());

        let index_width = (self.rows.len() - 1).to_string().len();
        let mut widths = vec![0usize; column_count];
        for (i, width) in widths.iter_mut().enumerate() {
            *width = self.header_at(i).chars().count();
            for row in &self.rows {
                *width = (*width).max(cell_at(row, i).chars().count());
            }
        }

        let mut header_line = " ".repeat(index_width);
        for (i, width) in widths.iter().enumerate() {
            header_line.push_str(COLUMN_GAP);
            header_line.push_str(&pad_left(self.header_at(i), *width));
        }

        let mut out = header_line;
        for (index, row) in self.rows.iter().enumerate() {
            let mut line = format!("{:<index_width$}", index);
            for (i, width) in widths.iter().enumerate() {
                line.push_str(COLUMN_GAP);
                line.push_str(&pad_left(cell_at(row, i), *width));
            }

            if max_chars > 0 && out.len() + 1 + line.len() > max_chars {
                let omitted = self.rows.len() - index;
                out.push_str(&format!("\n... ({omitted} more rows omitted)"));
                return out;
            }
            out.push('\n');
            out.push_str(&line);
        }
        out
    }

    fn render_empty(&self) -> String {
        format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: []",
            self.headers.join(", ")
        )
    }

    fn header_at(&self, i: usize) -> &str {
        self.headers.get(i).map(String::as_str).unwrap_or("")
    }
}

fn cell_at(row: &[String], i: usize) -> &str {
    match row.get(i) {
        Some(cell) if !cell.trim().is_empty() => cell.as_str(),
        _ => MISSING_CELL,
    }
}

fn pad_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teachers() -> Table {
        Table::from_rows(
            ["teacher_id", "name", "village"],
            [
                ["T001", "Asha", "V001"],
                ["T002", "Ravi", "V002"],
                ["T003", "Meena", "V001"],
            ],
        )
    }

    #[test]
    fn test_render_aligns_columns() {
        let rendered = teachers().render();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "   teacher_id   name  village");
        assert_eq!(lines[1], "0        T001   Asha     V001");
        assert_eq!(lines[3], "2        T003  Meena     V001");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_placeholder() {
        assert_eq!(
            Table::default().render(),
            "Empty DataFrame\nColumns: []\nIndex: []"
        );
        let headers_only = Table::from_rows(["a", "b"], Vec::<Vec<&str>>::new());
        assert_eq!(
            headers_only.render(),
            "Empty DataFrame\nColumns: [a, b]\nIndex: []"
        );
    }

    #[test]
    fn test_missing_cells_render_as_nan() {
        let table = Table::from_rows(["id", "score"], [vec!["S1", ""], vec!["S2"]]);
        let rendered = table.render();
        assert!(rendered.contains("S1    NaN"));
        assert!(rendered.contains("S2    NaN"));
    }

    #[test]
    fn test_cap_truncates_on_row_boundary() {
        let full = teachers().render();
        let first_two_lines = full.lines().take(2).collect::<Vec<_>>().join("\n");

        let capped = teachers().render_capped(first_two_lines.len() + 5);
        assert!(capped.starts_with(&first_two_lines));
        assert!(capped.ends_with("... (2 more rows omitted)"));
        assert!(!capped.contains("T002"));
    }

    #[test]
    fn test_zero_cap_means_unlimited() {
        let table = teachers();
        assert_eq!(table.render_capped(0), table.render());
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut table = teachers();
        table.append(Table::from_rows(
            ["teacher_id", "name", "village"],
            [["T001", "Asha", "V001"]],
        ));
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.rows()[0], table.rows()[3]);
    }
}
