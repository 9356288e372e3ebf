//! Load worksheets into [`DataTable`]s.
//!
//! Any format calamine can open is accepted (xlsx, xls, xlsb, ods). The
//! first row of a sheet's used range becomes the column headers; every
//! later row becomes a data row, padded to the header width.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;
use tracing::debug;

use pivot_model::{Cell, DataTable};

/// Errors that can occur while loading a worksheet.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The workbook could not be opened at all.
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The requested sheet does not exist.
    #[error("workbook {path} has no sheet named '{sheet}' (available: {})", .available.join(", "))]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    /// The sheet exists but its cells could not be read.
    #[error("failed to read sheet '{sheet}': {source}")]
    Read {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// The sheet has no header row.
    #[error("sheet '{sheet}' is empty")]
    EmptySheet { sheet: String },
}

/// Result type alias for ingestion.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Read one worksheet into a table.
pub fn read_sheet(path: &Path, sheet: &str) -> Result<DataTable> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let available: Vec<String> = workbook.sheet_names().to_vec();
    if !available.iter().any(|name| name == sheet) {
        return Err(IngestError::SheetNotFound {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| IngestError::Read {
            sheet: sheet.to_string(),
            source,
        })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(IngestError::EmptySheet {
            sheet: sheet.to_string(),
        });
    };

    let columns: Vec<String> = header.iter().map(header_name).collect();
    let mut table = DataTable::new(sheet, columns);
    for row in rows {
        table.push_row(row.iter().map(convert_cell).collect());
    }

    debug!(
        sheet,
        rows = table.height(),
        columns = table.width(),
        "worksheet loaded"
    );
    Ok(table)
}

/// Sheet names present in a workbook, in file order.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(workbook.sheet_names().to_vec())
}

fn header_name(data: &Data) -> String {
    convert_cell(data).to_string().trim().to_string()
}

/// Map a calamine cell onto the table model.
fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(value) => {
            if value.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(value.clone())
            }
        }
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Bool(value) => Cell::Bool(*value),
        // Error cells survive as text so they stay visible in output.
        Data::Error(error) => Cell::text(format!("#{error:?}")),
        Data::DateTime(datetime) => match datetime.as_datetime() {
            Some(value) => Cell::DateTime(value),
            // Serial values outside the representable range stay numeric.
            None => Cell::Number(datetime.as_f64()),
        },
        Data::DateTimeIso(value) => match parse_iso_datetime(value) {
            Some(parsed) => Cell::DateTime(parsed),
            None => Cell::text(value.clone()),
        },
        Data::DurationIso(value) => Cell::text(value.clone()),
    }
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
