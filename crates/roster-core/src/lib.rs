//! The roster import pipeline.
//!
//! Single pass over a raw export: discover the header, clean every row,
//! accumulate diagnostics, then write the cleaned CSV and the JSON report.

pub mod columns;
pub mod pipeline;

pub use columns::ColumnLayout;
pub use pipeline::{ImportOutcome, run_import};
