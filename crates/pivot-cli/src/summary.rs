use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pivot_cli::pipeline::{EnrichOutcome, ReportOutcome};

pub fn print_enrich_summary(outcome: &EnrichOutcome) {
    println!("Rows: {}", outcome.rows);
    println!("Columns: {}", outcome.columns);
    println!("Output: {}", outcome.output.display());
}

pub fn print_report_summary(outcome: &ReportOutcome) {
    println!("Output: {}", outcome.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Scheme"),
        header_cell("Filter"),
        header_cell("Source rows"),
        header_cell("Blocks"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for sheet in &outcome.book.sheets {
        table.add_row(vec![
            Cell::new(&sheet.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&sheet.scheme),
            Cell::new(sheet.filter.to_string()),
            Cell::new(sheet.source_rows),
            Cell::new(sheet.blocks.len()),
        ]);
    }
    println!("{table}");
    if !outcome.book.skipped.is_empty() {
        println!("Skipped:");
        for skip in &outcome.book.skipped {
            println!("- {skip}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
