//! CLI library components for the pivot report generator.

pub mod logging;
pub mod pipeline;
pub mod selections;
