//! CSV ingestion for raw roster exports.

pub mod table;

pub use table::{RosterTable, locate_header, read_roster_table, scrub_cell};
