//! Raw-export enrichment: benefit category and first-occurrence flags.

use tracing::debug;

use pivot_model::columns;
use pivot_model::{BenefitCategory, Cell, DataTable, Result};

/// Enrich a raw claims export.
///
/// Adds four columns and touches nothing else: `BENEFIT` (the derived
/// category, right after `BENEFIT DESCRIPTION`), `UNIQUE COUNT` (right
/// after `MEMBER NO`), and `MEMBER + TRANS DATE` plus `COUNT` at the
/// end. Row order and count are preserved exactly.
pub fn preprocess(raw: &DataTable) -> Result<DataTable> {
    raw.require_columns(&[
        columns::BENEFIT_DESCRIPTION,
        columns::MEMBER_NO,
        columns::TRANSACTION_DATE,
    ])?;
    let mut table = raw.clone();

    // Benefit category lands right after the description it derives from.
    let description = table.require_columns(&[columns::BENEFIT_DESCRIPTION])?[0];
    let benefits: Vec<Cell> = table
        .column(description)
        .map(|cell| Cell::text(BenefitCategory::classify_cell(cell).label()))
        .collect();
    table.insert_column(description + 1, columns::BENEFIT, benefits);

    let indices = table.require_columns(&[columns::MEMBER_NO, columns::TRANSACTION_DATE])?;
    let (member, date) = (indices[0], indices[1]);

    // Keys use the display form of both cells, so a member number stored
    // as 1234.0 and one stored as "1234" collide on the same key.
    let mut members = Vec::with_capacity(table.height());
    let mut keys = Vec::with_capacity(table.height());
    for row in table.rows() {
        let member_text = row[member].to_string();
        keys.push(format!("{member_text}{}", row[date]));
        members.push(member_text);
    }

    let unique_flags = first_occurrence_flags(&members);
    table.insert_column(member + 1, columns::UNIQUE_COUNT, flag_cells(&unique_flags));

    let count_flags = first_occurrence_flags(&keys);
    table.push_column(
        columns::MEMBER_DATE_KEY,
        keys.into_iter().map(Cell::Text).collect(),
    );
    table.push_column(columns::COUNT, flag_cells(&count_flags));

    debug!(
        rows = table.height(),
        columns = table.width(),
        "table enriched"
    );
    Ok(table)
}

/// Mark the first row of each distinct key.
///
/// Rows are visited in key-sorted order (stable, so equal keys keep
/// their input order) and the flags are written back by row index; the
/// table itself is never reordered.
fn first_occurrence_flags(keys: &[String]) -> Vec<bool> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&left, &right| keys[left].cmp(&keys[right]));

    let mut flags = vec![false; keys.len()];
    let mut previous: Option<&str> = None;
    for &index in &order {
        let key = keys[index].as_str();
        if previous != Some(key) {
            flags[index] = true;
        }
        previous = Some(key);
    }
    flags
}

fn flag_cells(flags: &[bool]) -> Vec<Cell> {
    flags
        .iter()
        .map(|&flag| Cell::Number(if flag { 1.0 } else { 0.0 }))
        .collect()
}
