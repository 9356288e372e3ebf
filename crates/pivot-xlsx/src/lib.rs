pub mod writer;

pub use writer::{
    Result, WORKBOOK_MIME, WriteError, report_to_bytes, table_to_bytes, write_report, write_table,
};
