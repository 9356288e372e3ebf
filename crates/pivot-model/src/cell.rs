//! Cell values for tabular data.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// A single table cell.
///
/// Values keep the type the workbook gave them; conversions are explicit
/// and lossy conversions return `Option`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    /// Blank cell.
    #[default]
    Empty,
    /// Text value.
    Text(String),
    /// Numeric value (workbooks store all numbers as floats).
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Date or datetime value.
    DateTime(NaiveDateTime),
}

/// Text date formats accepted when a date arrives as a string.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

impl Cell {
    /// Build a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether the cell is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrow the text value, if this is a text cell.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric view: numbers directly, numeric text parsed.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    /// Date view: datetimes directly, text through the accepted formats.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::DateTime(value) => Some(value.date()),
            Self::Text(value) => parse_date_text(value),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    /// Display form used for composite keys and cell rendering.
    ///
    /// Whole numbers print without a decimal point so keys built from
    /// member identifiers are stable regardless of float storage.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value}")
                }
            }
            Self::Bool(value) => f.write_str(if *value { "TRUE" } else { "FALSE" }),
            Self::DateTime(value) => {
                if value.time().num_seconds_from_midnight() == 0 {
                    write!(f, "{}", value.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S"))
                }
            }
        }
    }
}

/// Parse a date from text, trying each accepted format in turn.
pub(crate) fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}
