//! Claim-table enrichment and pivot-report assembly.
//!
//! Two stages, both pure and in-memory. [`preprocess`] takes a raw
//! claims export and adds the derived benefit category plus the
//! first-occurrence flags the reports count with. [`generate_report`]
//! takes an enriched table and an ordered list of scheme selections and
//! produces one sheet of stacked summary blocks per scheme.

pub mod aggregate;
pub mod generate;
pub mod preprocess;
pub mod sheet_name;
pub mod transactions;

pub use aggregate::{Metric, benefit_pivot, lives_block, provider_block};
pub use generate::generate_report;
pub use preprocess::preprocess;
pub use sheet_name::SheetNamer;
pub use transactions::{Transaction, TransactionSet, extract_transactions, scheme_row_counts};
