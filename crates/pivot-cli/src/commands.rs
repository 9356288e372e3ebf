use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info_span;

use pivot_cli::pipeline::{
    EnrichOutcome, ReportOutcome, enrich, enrich_to_file, load_table, report_to_file,
};
use pivot_cli::selections::{all_schemes, load_selections_file, parse_scheme_arg};
use pivot_engine::scheme_row_counts;
use pivot_model::{DataTable, SchemeSelection};

use crate::cli::{PreprocessArgs, ReportArgs, RunArgs, SchemesArgs, SelectionArgs};
use crate::summary::apply_table_style;

pub fn run_preprocess(args: &PreprocessArgs) -> Result<EnrichOutcome> {
    let span = info_span!("preprocess", input = %args.input.display());
    let _guard = span.enter();

    let raw = load_table(&args.input, &args.sheet)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_enriched_path(&args.input));
    enrich_to_file(&raw, &output)
}

pub fn run_report(args: &ReportArgs) -> Result<ReportOutcome> {
    let span = info_span!("report", input = %args.input.display());
    let _guard = span.enter();

    let table = load_table(&args.input, &args.sheet)?;
    let selections = resolve_selections(&args.selection, &table)?;
    report_to_file(&table, &selections, &args.output)
}

pub fn run_pipeline(args: &RunArgs) -> Result<ReportOutcome> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Load the raw export
    // =========================================================================
    let raw = load_table(&args.input, &args.sheet)?;

    // =========================================================================
    // Stage 2: Derive benefit and occurrence columns
    // =========================================================================
    let enriched = enrich(&raw)?;

    // =========================================================================
    // Stage 3: Slice, aggregate, and write the report workbook
    // =========================================================================
    let selections = resolve_selections(&args.selection, &enriched)?;
    report_to_file(&enriched, &selections, &args.output)
}

pub fn run_schemes(args: &SchemesArgs) -> Result<()> {
    let data = load_table(&args.input, &args.sheet)?;
    let counts = scheme_row_counts(&data).context("count scheme rows")?;
    if counts.is_empty() {
        bail!("sheet '{}' holds no scheme values", args.sheet);
    }
    let mut table = Table::new();
    table.set_header(vec!["Scheme", "Rows"]);
    apply_table_style(&mut table);
    let mut total = 0usize;
    for (scheme, rows) in &counts {
        total += rows;
        table.add_row(vec![scheme.clone(), rows.to_string()]);
    }
    table.add_row(vec!["TOTAL".to_string(), total.to_string()]);
    println!("{table}");
    Ok(())
}

fn resolve_selections(args: &SelectionArgs, table: &DataTable) -> Result<Vec<SchemeSelection>> {
    if args.all {
        return all_schemes(table);
    }
    if let Some(path) = &args.selections_file {
        return load_selections_file(path);
    }
    if args.schemes.is_empty() {
        bail!("no schemes selected; pass --scheme, --selections, or --all");
    }
    args.schemes
        .iter()
        .map(|spec| parse_scheme_arg(spec))
        .collect()
}

fn default_enriched_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("export");
    input.with_file_name(format!("{stem}-enriched.xlsx"))
}
