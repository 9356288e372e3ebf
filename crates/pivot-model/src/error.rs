//! Error types shared by the preprocessing and reporting stages.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while enriching a table or building a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input table lacks columns a stage cannot run without.
    #[error("sheet '{sheet}' is missing required columns: {}", .columns.join(", "))]
    MissingColumns { sheet: String, columns: Vec<String> },

    /// A date filter whose start falls after its end.
    #[error("scheme '{scheme}': start date {start} is after end date {end}")]
    InvalidDateRange {
        scheme: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Result type alias for pivot-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Create a MissingColumns error.
    pub fn missing_columns(sheet: impl Into<String>, columns: Vec<String>) -> Self {
        Self::MissingColumns {
            sheet: sheet.into(),
            columns,
        }
    }

    /// Create an InvalidDateRange error.
    pub fn invalid_date_range(scheme: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self::InvalidDateRange {
            scheme: scheme.into(),
            start,
            end,
        }
    }
}
