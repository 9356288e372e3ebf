//! Report assembly: scheme selections in, sheets of blocks out.

use tracing::{debug, info, warn};

use pivot_model::{DataTable, EmptyScheme, ReportBook, ReportSheet, Result, SchemeSelection};

use crate::aggregate::{Metric, benefit_pivot, lives_block, provider_block};
use crate::sheet_name::SheetNamer;
use crate::transactions::{Transaction, extract_transactions};

/// Build the full report for an enriched table.
///
/// Every selection's date window is validated before any sheet is
/// built, so one bad range fails the run with nothing produced.
/// Selections that match no rows are skipped, recorded on the book, and
/// do not interrupt the rest. Sheet order follows selection order.
pub fn generate_report(table: &DataTable, selections: &[SchemeSelection]) -> Result<ReportBook> {
    for selection in selections {
        selection.validate()?;
    }

    let set = extract_transactions(table)?;
    if set.date_parse_failures > 0 {
        warn!(
            rows = set.date_parse_failures,
            "transaction dates failed to parse; those rows are excluded from month grouping"
        );
    }

    let mut namer = SheetNamer::new();
    let mut book = ReportBook::default();
    for selection in selections {
        let mut slice: Vec<&Transaction> = set
            .records
            .iter()
            .filter(|transaction| {
                transaction.scheme == selection.scheme
                    && selection.filter.admits(transaction.date)
            })
            .collect();
        if slice.is_empty() {
            warn!(
                scheme = %selection.scheme,
                filter = %selection.filter,
                "no rows matched; sheet skipped"
            );
            book.skipped.push(EmptyScheme {
                scheme: selection.scheme.clone(),
                filter: selection.filter,
            });
            continue;
        }

        // chronological month order falls out of this sort; undated
        // rows go last and keep their input order
        slice.sort_by_key(|transaction| (transaction.date.is_none(), transaction.date));

        let mut blocks = vec![
            benefit_pivot(&slice, Metric::Amount),
            benefit_pivot(&slice, Metric::Count),
            lives_block(&slice),
        ];
        if set.has_provider {
            blocks.push(provider_block(&slice, Metric::Amount));
            blocks.push(provider_block(&slice, Metric::Count));
        }

        let name = namer.assign(&selection.scheme);
        debug!(
            scheme = %selection.scheme,
            sheet = %name,
            rows = slice.len(),
            "sheet built"
        );
        book.sheets.push(ReportSheet {
            name,
            scheme: selection.scheme.clone(),
            filter: selection.filter,
            source_rows: slice.len(),
            blocks,
        });
    }

    info!(
        sheets = book.sheets.len(),
        skipped = book.skipped.len(),
        "report assembled"
    );
    Ok(book)
}
