//! Shared definitions for the roster import cleaner.
//!
//! This crate defines the two import kinds handled by the back office
//! (client and staff rosters), the diagnostics report emitted alongside
//! every cleaned CSV, and the fatal error conditions that abort a run.

pub mod error;
pub mod import;
pub mod report;

pub use error::ImportError;
pub use import::{ImportKind, PLACEHOLDER_DOMAIN, columns};
pub use report::{ImportReport, MissingFields, PlaceholderAssignment};
