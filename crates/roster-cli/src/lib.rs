//! CLI library components for the roster import cleaner.

pub mod logging;
