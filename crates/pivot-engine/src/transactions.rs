//! Typed row view of an enriched claims table.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use pivot_model::columns;
use pivot_model::{DataTable, Result};

/// One claim row in the shape the report blocks aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub scheme: String,
    /// Parsed transaction date; `None` when missing or unparseable.
    pub date: Option<NaiveDate>,
    pub benefit: String,
    pub amount: f64,
    pub count: f64,
    pub unique_count: f64,
    /// Provider, when the column exists and the cell is non-blank.
    pub provider: Option<String>,
}

/// Every transaction of a table, plus shape facts the engine needs.
#[derive(Debug, Clone)]
pub struct TransactionSet {
    pub records: Vec<Transaction>,
    /// Whether the optional `PROVIDER NAME` column was present.
    pub has_provider: bool,
    /// Rows whose date cell was non-empty but failed to parse.
    pub date_parse_failures: usize,
}

/// Read every row into a [`Transaction`], in table order.
///
/// Missing or non-numeric amounts and flags contribute 0; dates that
/// fail to parse are carried as `None` and tallied.
pub fn extract_transactions(table: &DataTable) -> Result<TransactionSet> {
    let indices = table.require_columns(&[
        columns::SCHEME,
        columns::TRANSACTION_DATE,
        columns::BENEFIT,
        columns::AMOUNT,
        columns::COUNT,
        columns::UNIQUE_COUNT,
    ])?;
    let (scheme, date, benefit, amount, count, unique) = (
        indices[0], indices[1], indices[2], indices[3], indices[4], indices[5],
    );
    let provider = table.column_index(columns::PROVIDER_NAME);

    let mut records = Vec::with_capacity(table.height());
    let mut date_parse_failures = 0usize;
    for row in table.rows() {
        let date_cell = &row[date];
        let parsed = date_cell.as_date();
        if parsed.is_none() && !date_cell.is_empty() {
            date_parse_failures += 1;
        }
        records.push(Transaction {
            scheme: row[scheme].to_string(),
            date: parsed,
            benefit: row[benefit].to_string(),
            amount: row[amount].as_number().unwrap_or(0.0),
            count: row[count].as_number().unwrap_or(0.0),
            unique_count: row[unique].as_number().unwrap_or(0.0),
            provider: provider.and_then(|index| {
                let text = row[index].to_string();
                if text.is_empty() { None } else { Some(text) }
            }),
        });
    }

    debug!(
        rows = records.len(),
        has_provider = provider.is_some(),
        date_parse_failures,
        "transactions extracted"
    );
    Ok(TransactionSet {
        records,
        has_provider: provider.is_some(),
        date_parse_failures,
    })
}

/// Distinct schemes with their row counts, sorted by scheme.
///
/// Requires only the `SCHEME` column, so it works on raw exports as
/// well as enriched tables. Blank scheme cells are ignored.
pub fn scheme_row_counts(table: &DataTable) -> Result<Vec<(String, usize)>> {
    let scheme = table.require_columns(&[columns::SCHEME])?[0];
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for cell in table.column(scheme) {
        let name = cell.to_string();
        if name.is_empty() {
            continue;
        }
        *counts.entry(name).or_insert(0) += 1;
    }
    Ok(counts.into_iter().collect())
}
