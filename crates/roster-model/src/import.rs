//! Import kinds and the column conventions of the raw roster exports.

use std::path::{Path, PathBuf};

/// Column names and fragments the importers look for in discovered headers.
pub mod columns {
    /// State / province column, present in both exports.
    pub const STATE: &str = "State";
    /// Date of birth column on the client export.
    pub const DOB: &str = "DOB";
    /// Phone column on the staff export.
    pub const PHONE: &str = "Phone";
    /// Email column. Matched case-insensitively; appended to the client
    /// export when absent.
    pub const EMAIL: &str = "Email";
    /// First name column on the client export.
    pub const FIRST_NAME: &str = "First Name";
    /// Last name column on the client export.
    pub const LAST_NAME: &str = "Last Name";
    /// Lowercase fragment identifying the client ID column. The vendor
    /// export varies the exact label ("Client ID", "Client Id #", ...).
    pub const CLIENT_ID_FRAGMENT: &str = "client id";
}

/// Domain appended to synthesized client email addresses. Non-deliverable
/// on purpose.
pub const PLACEHOLDER_DOMAIN: &str = "clients.placeholder.local";

/// The two roster imports handled by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// Client roster export.
    Client,
    /// Staff roster export.
    Staff,
}

impl ImportKind {
    /// Human-readable label used in logs and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Staff => "staff",
        }
    }

    /// Anchor column names used to locate the true header row. The header
    /// is the first row containing every anchor after cell scrubbing.
    pub fn anchor_columns(self) -> &'static [&'static str] {
        match self {
            Self::Client => &[columns::FIRST_NAME, columns::LAST_NAME],
            Self::Staff => &["Account Organization Name"],
        }
    }

    /// Whether this import synthesizes placeholder emails for rows that
    /// lack one. Only the client roster feeds account provisioning, so
    /// only it needs a usable address per row.
    pub fn synthesizes_emails(self) -> bool {
        matches!(self, Self::Client)
    }

    /// Path of the raw export inside the data directory.
    pub fn raw_path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(format!("{}_raw.csv", self.label()))
    }

    /// Path the cleaned CSV is written to.
    pub fn cleaned_path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(format!("{}_cleaned.csv", self.label()))
    }

    /// Path the JSON diagnostics report is written to.
    pub fn report_path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(format!("{}_import_report.json", self.label()))
    }
}

impl std::fmt::Display for ImportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
