//! Scheme selection sources: `--scheme` arguments, JSON files, or the
//! table itself.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use pivot_engine::scheme_row_counts;
use pivot_model::{DataTable, SchemeSelection};

/// Parse one `--scheme` argument.
///
/// Accepted forms are `NAME` (all dates) and
/// `NAME=YYYY-MM-DD..YYYY-MM-DD` (inclusive range).
pub fn parse_scheme_arg(spec: &str) -> Result<SchemeSelection> {
    let Some((name, window)) = spec.split_once('=') else {
        let name = spec.trim();
        if name.is_empty() {
            bail!("scheme name is empty");
        }
        return Ok(SchemeSelection::unfiltered(name));
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("scheme name is empty in '{spec}'");
    }
    let Some((start, end)) = window.split_once("..") else {
        bail!("date window in '{spec}' must look like YYYY-MM-DD..YYYY-MM-DD");
    };
    let start = parse_date(start.trim()).with_context(|| format!("start date in '{spec}'"))?;
    let end = parse_date(end.trim()).with_context(|| format!("end date in '{spec}'"))?;
    Ok(SchemeSelection::ranged(name, start, end))
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("'{text}' is not a YYYY-MM-DD date"))
}

/// Load a JSON array of selections from a file.
pub fn load_selections_file(path: &Path) -> Result<Vec<SchemeSelection>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let selections: Vec<SchemeSelection> =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    if selections.is_empty() {
        bail!("{} selects no schemes", path.display());
    }
    Ok(selections)
}

/// Every scheme in the table, unfiltered, in sorted order.
pub fn all_schemes(table: &DataTable) -> Result<Vec<SchemeSelection>> {
    let counts = scheme_row_counts(table)?;
    if counts.is_empty() {
        bail!("sheet '{}' holds no scheme values", table.name);
    }
    Ok(counts
        .into_iter()
        .map(|(scheme, _)| SchemeSelection::unfiltered(scheme))
        .collect())
}
