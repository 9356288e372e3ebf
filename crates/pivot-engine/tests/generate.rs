//! End-to-end: raw export through enrichment to the assembled report.

use chrono::NaiveDate;

use pivot_engine::{generate_report, preprocess};
use pivot_model::{Cell, DataTable, DateFilter, ReportError, SchemeSelection};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A small raw export covering two schemes, duplicate member/date
/// pairs, a repeat member, and a year boundary.
fn raw_export() -> DataTable {
    let mut table = DataTable::new(
        "Export",
        [
            "CLAIM NO",
            "MEMBER NO",
            "BENEFIT DESCRIPTION",
            "TRANSACTION DATE",
            "AMOUNT",
            "PROVIDER NAME",
            "SCHEME",
        ]
        .map(String::from)
        .to_vec(),
    );
    let mut push = |claim: &str,
                    member: f64,
                    desc: &str,
                    when: &str,
                    amount: f64,
                    provider: &str,
                    scheme: &str| {
        table.push_row(vec![
            Cell::text(claim),
            Cell::Number(member),
            Cell::text(desc),
            Cell::text(when),
            Cell::Number(amount),
            Cell::text(provider),
            Cell::text(scheme),
        ]);
    };
    push("C1", 1001.0, "ROUTINE DENTAL", "2024-01-10", 1500.0, "MERCY HOSPITAL", "ACME STAFF");
    push("C2", 1001.0, "OPTICAL FRAMES", "2024-01-10", 800.0, "VISION CENTER", "ACME STAFF");
    push("C3", 2002.0, "OUT PATIENT OVERALL", "2024-02-05", 400.0, "MERCY HOSPITAL", "ACME STAFF");
    push("C4", 1001.0, "ROUTINE DENTAL", "2024-03-15", 200.0, "MERCY HOSPITAL", "ACME STAFF");
    push("C5", 3003.0, "LAST EXPENSE", "2023-12-01", 5000.0, "FUNERAL SVC", "OMEGA LTD");
    push("C6", 4004.0, "NORMAL DELIVERY", "2024-01-20", 2500.0, "MERCY HOSPITAL", "OMEGA LTD");
    table
}

fn build() -> pivot_model::ReportBook {
    let enriched = preprocess(&raw_export()).unwrap();
    let selections = vec![
        SchemeSelection::ranged("ACME STAFF", date(2024, 1, 1), date(2024, 2, 28)),
        SchemeSelection::unfiltered("OMEGA LTD"),
        SchemeSelection::unfiltered("GHOST SCHEME"),
    ];
    generate_report(&enriched, &selections).unwrap()
}

#[test]
fn sheets_follow_selection_order_and_empty_schemes_are_skipped() {
    let book = build();
    let names: Vec<&str> = book.sheets.iter().map(|sheet| sheet.name.as_str()).collect();
    assert_eq!(names, vec!["ACME STAFF", "OMEGA LTD"]);
    assert_eq!(book.sheets[0].source_rows, 3); // March claim is filtered out
    assert_eq!(
        book.sheets[0].filter,
        DateFilter::Range {
            start: date(2024, 1, 1),
            end: date(2024, 2, 28),
        }
    );
    assert_eq!(book.sheets[1].filter, DateFilter::All);
    assert_eq!(book.skipped.len(), 1);
    assert_eq!(book.skipped[0].scheme, "GHOST SCHEME");
}

#[test]
fn every_sheet_carries_the_five_blocks_in_order() {
    let book = build();
    for sheet in &book.sheets {
        let titles: Vec<&str> = sheet.blocks.iter().map(|block| block.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Benefit by Amount",
                "Benefit by Count",
                "Number of Lives (Unique Count)",
                "Provider by Amount (Descending)",
                "Provider by Count (Descending)",
            ]
        );
    }
}

#[test]
fn amount_pivot_sums_with_margins_and_zero_fills() {
    let book = build();
    let block = &book.sheets[0].blocks[0];
    assert_eq!(
        block.header,
        vec![
            "TRANSACTION DATE NORMALIZED",
            "DENTAL",
            "OPTICAL",
            "OUTPATIENT",
            "Grand Total"
        ]
    );
    assert_eq!(
        block.rows,
        vec![
            vec![
                Cell::text("01/2024"),
                Cell::Number(1500.0),
                Cell::Number(800.0),
                Cell::Number(0.0),
                Cell::Number(2300.0),
            ],
            vec![
                Cell::text("02/2024"),
                Cell::Number(0.0),
                Cell::Number(0.0),
                Cell::Number(400.0),
                Cell::Number(400.0),
            ],
            vec![
                Cell::text("Grand Total"),
                Cell::Number(1500.0),
                Cell::Number(800.0),
                Cell::Number(400.0),
                Cell::Number(2700.0),
            ],
        ]
    );
}

#[test]
fn count_pivot_reflects_first_occurrence_flags() {
    let book = build();
    let block = &book.sheets[0].blocks[1];
    // C2 shares member and date with C1, so only two claims count
    assert_eq!(
        block.rows.last().unwrap(),
        &vec![
            Cell::text("Grand Total"),
            Cell::Number(1.0),
            Cell::Number(0.0),
            Cell::Number(1.0),
            Cell::Number(2.0),
        ]
    );
}

#[test]
fn lives_block_counts_each_member_once() {
    let book = build();
    let block = &book.sheets[0].blocks[2];
    assert_eq!(block.header, vec!["TRANSACTION DATE NORMALIZED", "UNIQUE COUNT"]);
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
fn provider_blocks_rank_by_value() {
    let book = build();
    let amount = &book.sheets[0].blocks[3];
    assert_eq!(
        amount.rows,
        vec![
            vec![Cell::text("MERCY HOSPITAL"), Cell::Number(1900.0)],
            vec![Cell::text("VISION CENTER"), Cell::Number(800.0)],
        ]
    );
    let count = &book.sheets[0].blocks[4];
    assert_eq!(
        count.rows,
        vec![
            vec![Cell::text("MERCY HOSPITAL"), Cell::Number(2.0)],
            vec![Cell::text("VISION CENTER"), Cell::Number(0.0)],
        ]
    );
}

#[test]
fn provider_blocks_appear_only_with_the_provider_column() {
    let mut table = DataTable::new(
        "Export",
        [
            "MEMBER NO",
            "BENEFIT DESCRIPTION",
            "TRANSACTION DATE",
            "AMOUNT",
            "SCHEME",
        ]
        .map(String::from)
        .to_vec(),
    );
    table.push_row(vec![
        Cell::Number(1001.0),
        Cell::text("ROUTINE DENTAL"),
        Cell::text("2024-01-10"),
        Cell::Number(1500.0),
        Cell::text("ACME STAFF"),
    ]);
    table.push_row(vec![
        Cell::Number(2002.0),
        Cell::text("OPTICAL FRAMES"),
        Cell::text("2024-02-05"),
        Cell::Number(800.0),
        Cell::text("ACME STAFF"),
    ]);
    let enriched = preprocess(&table).unwrap();
    let book = generate_report(&enriched, &[SchemeSelection::unfiltered("ACME STAFF")]).unwrap();

    let sheet = &book.sheets[0];
    let titles: Vec<&str> = sheet.blocks.iter().map(|block| block.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Benefit by Amount",
            "Benefit by Count",
            "Number of Lives (Unique Count)",
        ]
    );
    let starts: Vec<usize> = sheet.placements().map(|(start, _)| start).collect();
    // heights: 5, 5, 5 with 3 blank rows between
    assert_eq!(starts, vec![0, 8, 16]);
}

#[test]
fn months_order_chronologically_across_years() {
    let book = build();
    let omega = &book.sheets[1];
    let labels: Vec<String> = omega.blocks[0]
        .rows
        .iter()
        .map(|row| row[0].to_string())
        .collect();
    assert_eq!(labels, vec!["12/2023", "01/2024", "Grand Total"]);
}

#[test]
fn blocks_stack_with_a_uniform_three_row_gap() {
    let book = build();
    let starts: Vec<usize> = book.sheets[0].placements().map(|(start, _)| start).collect();
    // heights: 5, 5, 5, 4, 4 with 3 blank rows between
    assert_eq!(starts, vec![0, 8, 16, 24, 31]);
}

#[test]
fn one_bad_range_fails_the_whole_run() {
    let enriched = preprocess(&raw_export()).unwrap();
    let selections = vec![
        SchemeSelection::unfiltered("ACME STAFF"),
        SchemeSelection::ranged("OMEGA LTD", date(2024, 6, 1), date(2024, 1, 1)),
    ];
    let err = generate_report(&enriched, &selections).unwrap_err();
    assert!(matches!(err, ReportError::InvalidDateRange { .. }));
}

#[test]
fn duplicate_selections_get_suffixed_sheet_names() {
    let enriched = preprocess(&raw_export()).unwrap();
    let selections = vec![
        SchemeSelection::unfiltered("ACME STAFF"),
        SchemeSelection::unfiltered("ACME STAFF"),
    ];
    let book = generate_report(&enriched, &selections).unwrap();
    let names: Vec<&str> = book.sheets.iter().map(|sheet| sheet.name.as_str()).collect();
    assert_eq!(names, vec!["ACME STAFF", "ACME STAFF 1"]);
}
