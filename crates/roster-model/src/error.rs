//! Fatal error conditions for roster imports.
//!
//! Only two conditions abort a run outright: the raw export is missing, or
//! no header row can be located. Row-level defects (unparsable dates,
//! missing fields, duplicate keys) never error; they are normalized or
//! surfaced in the diagnostics report instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an import run with no output written.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The raw export does not exist at the conventional path.
    #[error("source CSV not found at {}", .0.display())]
    SourceMissing(PathBuf),

    /// No row contained every anchor column for this import.
    #[error("unable to locate header row in {import} CSV (expected columns: {})", .anchors.join(", "))]
    HeaderNotFound {
        /// Import label ("client" or "staff").
        import: &'static str,
        /// Anchor column names that were searched for.
        anchors: Vec<String>,
    },

    /// The CSV reader or writer failed partway through a file.
    #[error("{}: {source}", .path.display())]
    Csv {
        /// File being read.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// An output file could not be written.
    #[error("write {}: {source}", .path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The diagnostics report failed to serialize.
    #[error("serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
