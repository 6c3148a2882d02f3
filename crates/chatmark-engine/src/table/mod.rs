//! # Tables
//!
//! Pipe-delimited rows collected into a rectangular [`Table`], plus the
//! delimited-text export in [`export`].
//!
//! ```text
//! | Keyword | Clicks |     <- header (first non-separator row)
//! |---------|:------:|     <- separator, dropped
//! | shoes   | 120    |     <- body, source order kept
//! ```

pub mod export;

use serde::Serialize;

pub use export::escape_field;

/// One table row: cell strings, already trimmed.
pub type Row = Vec<String>;

/// A rectangular table.
///
/// # Invariants
///
/// - `header` and every row of `body` have the same length
/// - that length is the largest cell count seen across the source rows, and
///   never less than 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    header: Row,
    body: Vec<Row>,
}

impl Table {
    /// Builds a table, right-padding short rows with empty cells.
    pub fn new(mut header: Row, mut body: Vec<Row>) -> Self {
        let width = body
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0)
            .max(1);

        header.resize(width, String::new());
        for row in &mut body {
            row.resize(width, String::new());
        }
        Self { header, body }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Body rows in source order, each as wide as the header.
    pub fn body(&self) -> &[Row] {
        &self.body
    }

    /// Builds a table from consecutive table-row lines.
    ///
    /// Separator rows are skipped. The first remaining row is the header and
    /// the rest form the body in input order. No header row at all (only
    /// separators) gives a single empty header cell.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut header: Option<Row> = None;
        let mut body = vec![];

        for line in lines {
            let cells = TableRow::split_cells(line);
            if TableRow::is_separator(&cells) {
                continue;
            }
            match header {
                None => header = Some(cells),
                Some(_) => body.push(cells),
            }
        }

        Self::new(header.unwrap_or_default(), body)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Header followed by body rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.header).chain(self.body.iter())
    }
}

/// Table row syntax with owned delimiter constant.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// A table row starts and ends with a pipe and has content between them.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 3 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// Splits a row into trimmed cells, dropping the empty fragments outside
    /// the outer pipes.
    pub fn split_cells(line: &str) -> Row {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(|c| c.trim().to_string()).collect()
    }

    /// Every cell is a run of at least two dashes, optionally wrapped in
    /// alignment colons (`---`, `:--`, `--:`, `:-:`).
    pub fn is_separator(cells: &[String]) -> bool {
        !cells.is_empty() && cells.iter().all(|c| Self::is_separator_cell(c))
    }

    fn is_separator_cell(cell: &str) -> bool {
        let c = cell.trim();
        let c = c.strip_prefix(':').unwrap_or(c);
        let c = c.strip_suffix(':').unwrap_or(c);
        c.len() >= 2 && c.chars().all(|ch| ch == '-')
    }
}
