//! Reading raw roster exports and locating the true header row.
//!
//! The vendor exports are not clean tables: banner text, export metadata,
//! and blank spacer rows commonly precede the header. The header is found
//! by anchor matching, not by position: the first row whose scrubbed cells
//! contain every anchor column name for the import kind.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::{ImportError, ImportKind};

/// A raw export with its header row located.
///
/// Data rows are kept exactly as read (unscrubbed, original widths) so the
/// pipeline can number them by file position before skipping blanks.
#[derive(Debug, Clone)]
pub struct RosterTable {
    /// 0-based index of the header row among the file's records.
    pub header_row: usize,
    /// Scrubbed header cells, original order preserved.
    pub headers: Vec<String>,
    /// All records following the header, blanks included.
    pub rows: Vec<Vec<String>>,
}

impl RosterTable {
    /// 1-based file row number of the first data row.
    pub fn first_data_row_number(&self) -> u32 {
        self.header_row as u32 + 2
    }
}

/// Replace embedded CR/LF with a single space, then trim whitespace and
/// any stray byte-order mark.
pub fn scrub_cell(raw: &str) -> String {
    let flattened: String = raw
        .chars()
        .map(|ch| if ch == '\r' || ch == '\n' { ' ' } else { ch })
        .collect();
    flattened
        .trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
        .to_string()
}

/// Find the first row whose scrubbed cells contain every anchor name.
pub fn locate_header(rows: &[Vec<String>], anchors: &[&str]) -> Option<usize> {
    rows.iter().position(|row| {
        let scrubbed: Vec<String> = row.iter().map(|cell| scrub_cell(cell)).collect();
        anchors
            .iter()
            .all(|anchor| scrubbed.iter().any(|cell| cell.as_str() == *anchor))
    })
}

/// Read a raw roster export and locate its header.
///
/// # Errors
///
/// Fails when the file does not exist, a record cannot be read, or no row
/// matches the import's anchor columns.
pub fn read_roster_table(path: &Path, kind: ImportKind) -> Result<RosterTable, ImportError> {
    if !path.exists() {
        return Err(ImportError::SourceMissing(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| ImportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ImportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record.iter().map(String::from).collect());
    }

    let anchors = kind.anchor_columns();
    let header_row =
        locate_header(&records, anchors).ok_or_else(|| ImportError::HeaderNotFound {
            import: kind.label(),
            anchors: anchors.iter().map(|a| (*a).to_string()).collect(),
        })?;

    let headers: Vec<String> = records[header_row].iter().map(|c| scrub_cell(c)).collect();
    let rows = records.split_off(header_row + 1);
    debug!(
        path = %path.display(),
        header_row,
        column_count = headers.len(),
        data_rows = rows.len(),
        "located header row"
    );

    Ok(RosterTable {
        header_row,
        headers,
        rows,
    })
}
