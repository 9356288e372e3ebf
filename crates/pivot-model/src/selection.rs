//! Scheme selections and their optional date windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Date window applied to one scheme's rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateFilter {
    /// Keep every row, dated or not.
    #[default]
    All,
    /// Keep rows whose date lies in `start..=end`.
    Range { start: NaiveDate, end: NaiveDate },
}

impl DateFilter {
    /// Whether a row with this transaction date passes the filter.
    ///
    /// Rows without a parseable date pass only the `All` filter.
    #[must_use]
    pub fn admits(&self, date: Option<NaiveDate>) -> bool {
        match self {
            Self::All => true,
            Self::Range { start, end } => {
                date.is_some_and(|d| *start <= d && d <= *end)
            }
        }
    }

    /// Reject ranges whose start falls after their end.
    pub fn validate(&self, scheme: &str) -> Result<()> {
        match self {
            Self::Range { start, end } if start > end => {
                Err(ReportError::invalid_date_range(scheme, *start, *end))
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all dates"),
            Self::Range { start, end } => write!(f, "{start}..{end}"),
        }
    }
}

/// One requested report sheet: a scheme plus its date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeSelection {
    /// Scheme identifier, matched exactly against the SCHEME column.
    pub scheme: String,
    /// Date window (defaults to all dates).
    #[serde(default)]
    pub filter: DateFilter,
}

impl SchemeSelection {
    /// Select a scheme without a date window.
    #[must_use]
    pub fn unfiltered(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            filter: DateFilter::All,
        }
    }

    /// Select a scheme with an inclusive date range.
    #[must_use]
    pub fn ranged(scheme: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            scheme: scheme.into(),
            filter: DateFilter::Range { start, end },
        }
    }

    /// Validate the date window against this scheme's name.
    pub fn validate(&self) -> Result<()> {
        self.filter.validate(&self.scheme)
    }
}
