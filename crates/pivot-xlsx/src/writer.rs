//! Workbook rendering with rust_xlsxwriter.
//!
//! Report sheets render each block at its computed start row: title in
//! the first column, header row beneath it, then the data rows. Tables
//! render as a plain grid with headers on row 0. Sheet names are
//! expected to be valid already (the report engine sanitizes them).

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use thiserror::Error;
use tracing::debug;

use pivot_model::{Cell, DataTable, ReportBook};

/// MIME type of the workbooks this module produces.
pub const WORKBOOK_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Errors raised while rendering a workbook.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The underlying workbook writer failed.
    #[error("workbook write failed: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Result type alias for workbook rendering.
pub type Result<T> = std::result::Result<T, WriteError>;

/// Render a report to a workbook file.
pub fn write_report(book: &ReportBook, path: &Path) -> Result<()> {
    let mut workbook = build_report(book)?;
    workbook.save(path)?;
    debug!(
        path = %path.display(),
        sheets = book.sheets.len(),
        "report workbook saved"
    );
    Ok(())
}

/// Render a report to workbook bytes, for callers that serve downloads.
pub fn report_to_bytes(book: &ReportBook) -> Result<Vec<u8>> {
    let mut workbook = build_report(book)?;
    Ok(workbook.save_to_buffer()?)
}

/// Write one table as a plain grid, headers on the first row.
pub fn write_table(table: &DataTable, sheet: &str, path: &Path) -> Result<()> {
    let mut workbook = build_table(table, sheet)?;
    workbook.save(path)?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "table workbook saved"
    );
    Ok(())
}

/// Table-to-bytes variant of [`write_table`].
pub fn table_to_bytes(table: &DataTable, sheet: &str) -> Result<Vec<u8>> {
    let mut workbook = build_table(table, sheet)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_report(book: &ReportBook) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    for sheet in &book.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        for (start, block) in sheet.placements() {
            let mut row = start as u32;
            worksheet.write_string(row, 0, &block.title)?;
            row += 1;
            for (column, header) in block.header.iter().enumerate() {
                worksheet.write_string(row, column as u16, header)?;
            }
            for cells in &block.rows {
                row += 1;
                for (column, cell) in cells.iter().enumerate() {
                    write_cell(worksheet, row, column as u16, cell)?;
                }
            }
        }
    }
    Ok(workbook)
}

fn build_table(table: &DataTable, sheet: &str) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet)?;
    for (column, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, column as u16, header)?;
    }
    for (index, cells) in table.rows().iter().enumerate() {
        let row = index as u32 + 1;
        for (column, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, column as u16, cell)?;
        }
    }
    Ok(workbook)
}

fn write_cell(worksheet: &mut Worksheet, row: u32, column: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Empty => {}
        Cell::Text(value) => {
            worksheet.write_string(row, column, value)?;
        }
        Cell::Number(value) => {
            worksheet.write_number(row, column, *value)?;
        }
        Cell::Bool(value) => {
            worksheet.write_boolean(row, column, *value)?;
        }
        // Dates render through their display form so readers see the
        // same text the composite keys were built from.
        Cell::DateTime(_) => {
            worksheet.write_string(row, column, cell.to_string())?;
        }
    }
    Ok(())
}
