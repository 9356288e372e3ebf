//! In-memory table with ordered, name-addressed columns.

use crate::cell::Cell;
use crate::error::{ReportError, Result};

/// A rectangular table read from one worksheet.
///
/// Rows are kept in input order; every row has exactly one cell per
/// column (rows are padded or truncated on insert).
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    /// Sheet the table came from, used for error context.
    pub name: String,
    /// Column headers, in sheet order.
    pub columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Create an empty table with the given headers.
    #[must_use]
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Number of data rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Append a row, padded or truncated to the column count.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Empty);
        self.rows.push(row);
    }

    /// All data rows in input order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at the given position, if within bounds.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Index of the first column with this exact header.
    #[must_use]
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == header)
    }

    /// Iterate one column top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Resolve headers to indices, or fail naming every absent column.
    pub fn require_columns(&self, headers: &[&str]) -> Result<Vec<usize>> {
        let mut indices = Vec::with_capacity(headers.len());
        let mut missing = Vec::new();
        for header in headers {
            match self.column_index(header) {
                Some(index) => indices.push(index),
                None => missing.push((*header).to_string()),
            }
        }
        if missing.is_empty() {
            Ok(indices)
        } else {
            Err(ReportError::missing_columns(&self.name, missing))
        }
    }

    /// Insert a column at `index` (clamped to the current width).
    ///
    /// `values` is padded or truncated to the row count.
    pub fn insert_column(&mut self, index: usize, header: impl Into<String>, mut values: Vec<Cell>) {
        let index = index.min(self.columns.len());
        values.resize(self.rows.len(), Cell::Empty);
        self.columns.insert(index, header.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(index, value);
        }
    }

    /// Append a column after the last one.
    pub fn push_column(&mut self, header: impl Into<String>, values: Vec<Cell>) {
        self.insert_column(self.columns.len(), header, values);
    }
}
