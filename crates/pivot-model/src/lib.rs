pub mod benefit;
pub mod cell;
pub mod columns;
pub mod error;
pub mod report;
pub mod selection;
pub mod table;

pub use benefit::BenefitCategory;
pub use cell::Cell;
pub use error::{ReportError, Result};
pub use report::{
    BLOCK_GAP_ROWS, EmptyScheme, ReportBlock, ReportBook, ReportSheet, SHEET_NAME_MAX,
};
pub use selection::{DateFilter, SchemeSelection};
pub use table::DataTable;
