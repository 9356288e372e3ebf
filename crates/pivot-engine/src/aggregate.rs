//! The five summary blocks built from one scheme's slice.
//!
//! A slice is the filtered, date-sorted rows of one scheme. Month-keyed
//! blocks take their row order from the slice (first-seen month order,
//! chronological because the caller sorts); provider blocks re-rank by
//! value in place.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use pivot_model::columns;
use pivot_model::{Cell, ReportBlock};

use crate::transactions::Transaction;

pub const BENEFIT_BY_AMOUNT_TITLE: &str = "Benefit by Amount";
pub const BENEFIT_BY_COUNT_TITLE: &str = "Benefit by Count";
pub const LIVES_TITLE: &str = "Number of Lives (Unique Count)";
pub const PROVIDER_BY_AMOUNT_TITLE: &str = "Provider by Amount (Descending)";
pub const PROVIDER_BY_COUNT_TITLE: &str = "Provider by Count (Descending)";

/// Which measure a block aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Amount,
    Count,
}

impl Metric {
    fn of(self, transaction: &Transaction) -> f64 {
        match self {
            Self::Amount => transaction.amount,
            Self::Count => transaction.count,
        }
    }

    fn column_label(self) -> &'static str {
        match self {
            Self::Amount => columns::AMOUNT,
            Self::Count => columns::COUNT,
        }
    }
}

/// Month label for a transaction date.
fn month_key(date: NaiveDate) -> String {
    format!("{:02}/{}", date.month(), date.year())
}

/// Distinct months in slice order (rows without a date contribute none).
fn month_order(slice: &[&Transaction]) -> Vec<String> {
    let mut months = Vec::new();
    for transaction in slice {
        if let Some(date) = transaction.date {
            let key = month_key(date);
            if !months.contains(&key) {
                months.push(key);
            }
        }
    }
    months
}

/// Month × benefit matrix of the summed metric, with margins.
///
/// Benefit columns cover every distinct benefit in the slice (dated or
/// not), sorted; a benefit seen only on undated rows shows as zeros.
/// The trailing `Grand Total` column and row sum what the grid shows.
pub fn benefit_pivot(slice: &[&Transaction], metric: Metric) -> ReportBlock {
    let months = month_order(slice);
    let benefits: Vec<String> = slice
        .iter()
        .map(|transaction| transaction.benefit.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect();

    let mut grid = vec![vec![0.0f64; benefits.len()]; months.len()];
    for transaction in slice {
        let Some(date) = transaction.date else {
            continue;
        };
        let key = month_key(date);
        let Some(row) = months.iter().position(|month| *month == key) else {
            continue;
        };
        let Some(column) = benefits
            .iter()
            .position(|benefit| *benefit == transaction.benefit)
        else {
            continue;
        };
        grid[row][column] += metric.of(transaction);
    }

    let title = match metric {
        Metric::Amount => BENEFIT_BY_AMOUNT_TITLE,
        Metric::Count => BENEFIT_BY_COUNT_TITLE,
    };
    let mut header = Vec::with_capacity(benefits.len() + 2);
    header.push(columns::NORMALIZED_DATE.to_string());
    header.extend(benefits.iter().cloned());
    header.push(columns::GRAND_TOTAL.to_string());

    let mut block = ReportBlock::new(title, header);
    let mut column_totals = vec![0.0f64; benefits.len()];
    for (month, values) in months.iter().zip(&grid) {
        let mut row = Vec::with_capacity(values.len() + 2);
        row.push(Cell::text(month.clone()));
        let mut row_total = 0.0;
        for (column, value) in values.iter().enumerate() {
            row.push(Cell::Number(*value));
            row_total += value;
            column_totals[column] += value;
        }
        row.push(Cell::Number(row_total));
        block.push_row(row);
    }

    let grand_total: f64 = column_totals.iter().sum();
    let mut margin = Vec::with_capacity(benefits.len() + 2);
    margin.push(Cell::text(columns::GRAND_TOTAL));
    margin.extend(column_totals.into_iter().map(Cell::Number));
    margin.push(Cell::Number(grand_total));
    block.push_row(margin);
    block
}

/// Unique-member count per month, with a `Grand Total` row.
pub fn lives_block(slice: &[&Transaction]) -> ReportBlock {
    let months = month_order(slice);
    let mut totals = vec![0.0f64; months.len()];
    for transaction in slice {
        let Some(date) = transaction.date else {
            continue;
        };
        let key = month_key(date);
        if let Some(index) = months.iter().position(|month| *month == key) {
            totals[index] += transaction.unique_count;
        }
    }

    let mut block = ReportBlock::new(
        LIVES_TITLE,
        vec![
            columns::NORMALIZED_DATE.to_string(),
            columns::UNIQUE_COUNT.to_string(),
        ],
    );
    let mut grand_total = 0.0;
    for (month, total) in months.iter().zip(&totals) {
        grand_total += total;
        block.push_row(vec![Cell::text(month.clone()), Cell::Number(*total)]);
    }
    block.push_row(vec![
        Cell::text(columns::GRAND_TOTAL),
        Cell::Number(grand_total),
    ]);
    block
}

/// Summed metric per provider, highest first.
///
/// Groups form alphabetically and the descending sort is stable, so
/// equal totals stay in provider order. Rows with no provider are left
/// out; undated rows participate.
pub fn provider_block(slice: &[&Transaction], metric: Metric) -> ReportBlock {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for transaction in slice {
        if let Some(provider) = transaction.provider.as_deref() {
            *totals.entry(provider).or_insert(0.0) += metric.of(transaction);
        }
    }
    let mut entries: Vec<(&str, f64)> = totals.into_iter().collect();
    entries.sort_by(|left, right| right.1.total_cmp(&left.1));

    let title = match metric {
        Metric::Amount => PROVIDER_BY_AMOUNT_TITLE,
        Metric::Count => PROVIDER_BY_COUNT_TITLE,
    };
    let mut block = ReportBlock::new(
        title,
        vec![
            columns::PROVIDER_NAME.to_string(),
            metric.column_label().to_string(),
        ],
    );
    for (provider, total) in entries {
        block.push_row(vec![Cell::text(provider), Cell::Number(total)]);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(
        date: Option<(i32, u32, u32)>,
        benefit: &str,
        amount: f64,
        count: f64,
        unique: f64,
        provider: Option<&str>,
    ) -> Transaction {
        Transaction {
            scheme: "ACME".to_string(),
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            benefit: benefit.to_string(),
            amount,
            count,
            unique_count: unique,
            provider: provider.map(String::from),
        }
    }

    fn slice(records: &[Transaction]) -> Vec<&Transaction> {
        records.iter().collect()
    }

    #[test]
    fn benefit_pivot_fills_gaps_and_sums_margins() {
        // already date-sorted, spanning a year boundary
        let records = vec![
            txn(Some((2023, 11, 5)), "DENTAL", 100.0, 1.0, 1.0, None),
            txn(Some((2023, 11, 20)), "OPTICAL", 50.0, 1.0, 0.0, None),
            txn(Some((2024, 1, 8)), "DENTAL", 25.0, 1.0, 0.0, None),
        ];
        let block = benefit_pivot(&slice(&records), Metric::Amount);

        assert_eq!(block.title, BENEFIT_BY_AMOUNT_TITLE);
        assert_eq!(
            block.header,
            vec![
                "TRANSACTION DATE NORMALIZED",
                "DENTAL",
                "OPTICAL",
                "Grand Total"
            ]
        );
        // chronological, not lexicographic: 11/2023 before 01/2024
        assert_eq!(
            block.rows,
            vec![
                vec![
                    Cell::text("11/2023"),
                    Cell::Number(100.0),
                    Cell::Number(50.0),
                    Cell::Number(150.0)
                ],
                vec![
                    Cell::text("01/2024"),
                    Cell::Number(25.0),
                    Cell::Number(0.0),
                    Cell::Number(25.0)
                ],
                vec![
                    Cell::text("Grand Total"),
                    Cell::Number(125.0),
                    Cell::Number(50.0),
                    Cell::Number(175.0)
                ],
            ]
        );
    }

    #[test]
    fn undated_rows_still_contribute_benefit_columns() {
        let records = vec![
            txn(Some((2024, 2, 1)), "DENTAL", 10.0, 1.0, 1.0, None),
            txn(None, "MATERNITY", 99.0, 1.0, 1.0, None),
        ];
        let block = benefit_pivot(&slice(&records), Metric::Amount);
        assert_eq!(
            block.header,
            vec![
                "TRANSACTION DATE NORMALIZED",
                "DENTAL",
                "MATERNITY",
                "Grand Total"
            ]
        );
        // the undated amount never lands in the grid
        assert_eq!(
            block.rows.last().unwrap(),
            &vec![
                Cell::text("Grand Total"),
                Cell::Number(10.0),
                Cell::Number(0.0),
                Cell::Number(10.0)
            ]
        );
    }

    #[test]
    fn count_metric_sums_the_count_flags() {
        let records = vec![
            txn(Some((2024, 2, 1)), "DENTAL", 10.0, 1.0, 1.0, None),
            txn(Some((2024, 2, 9)), "DENTAL", 20.0, 0.0, 0.0, None),
        ];
        let block = benefit_pivot(&slice(&records), Metric::Count);
        assert_eq!(block.title, BENEFIT_BY_COUNT_TITLE);
        assert_eq!(
            block.rows,
            vec![
                vec![Cell::text("02/2024"), Cell::Number(1.0), Cell::Number(1.0)],
                vec![
                    Cell::text("Grand Total"),
                    Cell::Number(1.0),
                    Cell::Number(1.0)
                ],
            ]
        );
    }

    #[test]
    fn lives_block_totals_unique_flags_per_month() {
        let records = vec![
            txn(Some((2024, 1, 3)), "DENTAL", 0.0, 1.0, 1.0, None),
            txn(Some((2024, 1, 9)), "DENTAL", 0.0, 1.0, 0.0, None),
            txn(Some((2024, 2, 1)), "DENTAL", 0.0, 1.0, 1.0, None),
        ];
        let block = lives_block(&slice(&records));
        assert_eq!(block.title, LIVES_TITLE);
        assert_eq!(
            block.rows,
            vec![
                vec![Cell::text("01/2024"), Cell::Number(1.0)],
                vec![Cell::text("02/2024"), Cell::Number(1.0)],
                vec![Cell::text("Grand Total"), Cell::Number(2.0)],
            ]
        );
    }

    #[test]
    fn lives_block_keeps_its_total_row_without_dates() {
        let records = vec![txn(None, "DENTAL", 0.0, 1.0, 1.0, None)];
        let block = lives_block(&slice(&records));
        assert_eq!(
            block.rows,
            vec![vec![Cell::text("Grand Total"), Cell::Number(0.0)]]
        );
    }

    #[test]
    fn providers_rank_descending_with_alphabetical_ties() {
        let records = vec![
            txn(Some((2024, 1, 1)), "DENTAL", 50.0, 1.0, 1.0, Some("ZETA CLINIC")),
            txn(Some((2024, 1, 2)), "DENTAL", 300.0, 1.0, 0.0, Some("MERCY HOSPITAL")),
            txn(Some((2024, 1, 3)), "DENTAL", 50.0, 1.0, 0.0, Some("ALPHA LAB")),
            txn(None, "DENTAL", 25.0, 1.0, 0.0, Some("MERCY HOSPITAL")),
            txn(Some((2024, 1, 4)), "DENTAL", 10.0, 1.0, 0.0, None),
        ];
        let block = provider_block(&slice(&records), Metric::Amount);
        assert_eq!(block.title, PROVIDER_BY_AMOUNT_TITLE);
        assert_eq!(block.header, vec!["PROVIDER NAME", "AMOUNT"]);
        // undated row still counts; blank provider row does not
        assert_eq!(
            block.rows,
            vec![
                vec![Cell::text("MERCY HOSPITAL"), Cell::Number(325.0)],
                vec![Cell::text("ALPHA LAB"), Cell::Number(50.0)],
                vec![Cell::text("ZETA CLINIC"), Cell::Number(50.0)],
            ]
        );
    }
}
