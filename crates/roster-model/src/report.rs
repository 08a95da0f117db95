//! Diagnostics report emitted alongside every cleaned CSV.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-run diagnostics, serialized as pretty JSON next to the cleaned CSV.
///
/// Both import kinds emit the same shape; the staff import leaves the
/// client-only collections empty. Duplicate maps only ever contain keys
/// observed on two or more rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Data rows written to the cleaned CSV (blank rows excluded).
    pub rows_written: usize,
    /// Whether an `Email` column was appended to the header.
    pub added_email_column: bool,
    /// Rows missing at least one required field after normalization.
    pub missing_required_rows: Vec<MissingFields>,
    /// Rows with no usable email and no email column to synthesize into.
    pub missing_email_rows: Vec<u32>,
    /// Emails observed on two or more rows, keyed by the email value.
    pub duplicate_emails: BTreeMap<String, Vec<u32>>,
    /// Client IDs observed on two or more rows, keyed by the ID value.
    pub duplicate_client_ids: BTreeMap<String, Vec<u32>>,
    /// Placeholder emails synthesized this run, in assignment order.
    pub placeholder_emails_assigned: Vec<PlaceholderAssignment>,
}

/// A row with one or more required fields empty after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFields {
    /// 1-based row number in the source file.
    pub row: u32,
    /// Names of the empty required fields.
    pub fields: Vec<String>,
}

/// One synthesized placeholder email assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderAssignment {
    /// 1-based row number in the source file.
    pub row: u32,
    /// The synthesized address, placeholder domain included.
    pub email: String,
}
