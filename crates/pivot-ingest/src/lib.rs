pub mod workbook;

pub use workbook::{IngestError, Result, read_sheet, sheet_names};
