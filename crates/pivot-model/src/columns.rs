//! Column and sheet names shared across the pipeline.
//!
//! Lookup is exact (case- and spacing-sensitive), so every stage refers to
//! these constants instead of spelling the headers out.

/// Scheme identifier column.
pub const SCHEME: &str = "SCHEME";
/// Transaction date column.
pub const TRANSACTION_DATE: &str = "TRANSACTION DATE";
/// Member identifier column.
pub const MEMBER_NO: &str = "MEMBER NO";
/// Free-text benefit description column (raw input).
pub const BENEFIT_DESCRIPTION: &str = "BENEFIT DESCRIPTION";
/// Derived benefit category column (enriched output).
pub const BENEFIT: &str = "BENEFIT";
/// Claim amount column.
pub const AMOUNT: &str = "AMOUNT";
/// First-occurrence flag per member and transaction date.
pub const COUNT: &str = "COUNT";
/// First-occurrence flag per member.
pub const UNIQUE_COUNT: &str = "UNIQUE COUNT";
/// Composite member/date key kept in the enriched output.
pub const MEMBER_DATE_KEY: &str = "MEMBER + TRANS DATE";
/// Care provider column (optional in report input).
pub const PROVIDER_NAME: &str = "PROVIDER NAME";

/// Row-label header used by the month-keyed report blocks.
pub const NORMALIZED_DATE: &str = "TRANSACTION DATE NORMALIZED";
/// Label of pivot margin rows and columns.
pub const GRAND_TOTAL: &str = "Grand Total";

/// Sheet raw claim exports conventionally arrive on.
pub const EXPORT_SHEET: &str = "Export";
/// Sheet enriched tables are written to and read from.
pub const ENRICHED_SHEET: &str = "Sheet1";
