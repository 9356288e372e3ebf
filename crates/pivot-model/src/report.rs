//! Report output model: blocks, sheets, and their vertical layout.

use crate::cell::Cell;
use crate::selection::DateFilter;

/// Workbook limit on worksheet name length.
pub const SHEET_NAME_MAX: usize = 31;

/// Blank rows between consecutive blocks on a sheet.
pub const BLOCK_GAP_ROWS: usize = 3;

/// One titled summary grid.
///
/// Rendered as a title row, a header row, then the data rows, all
/// starting in the first column.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportBlock {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportBlock {
    /// Create an empty block.
    #[must_use]
    pub fn new(title: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            title: title.into(),
            header,
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Rows the block occupies: title + header + data.
    #[must_use]
    pub fn height(&self) -> usize {
        2 + self.rows.len()
    }
}

/// One worksheet: a scheme's blocks in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSheet {
    /// Worksheet name (already sanitized and deduplicated).
    pub name: String,
    /// Scheme the sheet summarizes.
    pub scheme: String,
    /// Date window the slice was taken through.
    pub filter: DateFilter,
    /// Rows of the slice the blocks were built from.
    pub source_rows: usize,
    pub blocks: Vec<ReportBlock>,
}

impl ReportSheet {
    /// Each block with the worksheet row its title lands on.
    ///
    /// Blocks stack vertically, [`BLOCK_GAP_ROWS`] blank rows apart.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &ReportBlock)> {
        let mut next = 0usize;
        self.blocks.iter().map(move |block| {
            let start = next;
            next = start + block.height() + BLOCK_GAP_ROWS;
            (start, block)
        })
    }
}

/// A selected scheme that matched no rows; noted and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyScheme {
    pub scheme: String,
    pub filter: DateFilter,
}

impl std::fmt::Display for EmptyScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "scheme '{}' matched no rows ({})", self.scheme, self.filter)
    }
}

/// The full report: sheets to write plus the schemes that produced none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportBook {
    pub sheets: Vec<ReportSheet>,
    pub skipped: Vec<EmptyScheme>,
}

impl ReportBook {
    /// Whether no selection produced a sheet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
