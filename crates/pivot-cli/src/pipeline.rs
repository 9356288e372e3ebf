//! Workbook-to-workbook stages shared by the CLI commands.
//!
//! The full pipeline runs in two stages:
//! 1. **Enrich**: read a raw claims export, derive the benefit category
//!    and occurrence-flag columns.
//! 2. **Report**: slice the enriched table per scheme selection,
//!    aggregate into pivot blocks, write one worksheet per scheme.
//!
//! `preprocess` and `report` each run one stage against a file on disk;
//! `run` chains both and keeps the enriched table in memory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;

use pivot_engine::{generate_report, preprocess};
use pivot_model::{DataTable, ReportBook, SchemeSelection, columns};
use pivot_xlsx::{write_report, write_table};

/// Result of the enrichment stage.
#[derive(Debug)]
pub struct EnrichOutcome {
    /// Data rows written.
    pub rows: usize,
    /// Columns written, derived ones included.
    pub columns: usize,
    /// Workbook the enriched table went to.
    pub output: PathBuf,
}

/// Result of the report stage.
#[derive(Debug)]
pub struct ReportOutcome {
    /// The sheets that were written, plus the skipped selections.
    pub book: ReportBook,
    /// Workbook the report went to.
    pub output: PathBuf,
}

/// Read one worksheet into a table.
pub fn load_table(input: &Path, sheet: &str) -> Result<DataTable> {
    let start = Instant::now();
    let table = pivot_ingest::read_sheet(input, sheet)
        .with_context(|| format!("read sheet '{sheet}' from {}", input.display()))?;
    info!(
        sheet,
        rows = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "workbook loaded"
    );
    Ok(table)
}

/// Derive the benefit category and occurrence-flag columns.
pub fn enrich(raw: &DataTable) -> Result<DataTable> {
    preprocess(raw).context("derive benefit and occurrence columns")
}

/// Enrich a raw export and write it out as a single-sheet workbook.
pub fn enrich_to_file(raw: &DataTable, output: &Path) -> Result<EnrichOutcome> {
    let start = Instant::now();
    let enriched = enrich(raw)?;
    write_table(&enriched, columns::ENRICHED_SHEET, output)
        .with_context(|| format!("write {}", output.display()))?;
    info!(
        rows = enriched.height(),
        columns = enriched.width(),
        duration_ms = start.elapsed().as_millis(),
        output = %output.display(),
        "enriched table written"
    );
    Ok(EnrichOutcome {
        rows: enriched.height(),
        columns: enriched.width(),
        output: output.to_path_buf(),
    })
}

/// Build the pivot book for the selections and write the workbook.
///
/// Selections that match no rows are recorded on the book and reported
/// by the caller; a book with no sheets at all is an error and nothing
/// is written.
pub fn report_to_file(
    table: &DataTable,
    selections: &[SchemeSelection],
    output: &Path,
) -> Result<ReportOutcome> {
    let start = Instant::now();
    let book = generate_report(table, selections).context("build pivot sheets")?;
    if book.is_empty() {
        bail!("no selection matched any rows; nothing to write");
    }
    write_report(&book, output).with_context(|| format!("write {}", output.display()))?;
    info!(
        sheets = book.sheets.len(),
        skipped = book.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        output = %output.display(),
        "report workbook written"
    );
    Ok(ReportOutcome {
        book,
        output: output.to_path_buf(),
    })
}
