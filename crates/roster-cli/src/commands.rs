use std::path::Path;

use anyhow::{Context, Result};

use roster_core::run_import;
use roster_model::ImportKind;

use crate::summary::print_summary;

/// Run one import and print its summary.
pub fn run(kind: ImportKind, data_dir: &Path) -> Result<()> {
    let outcome = run_import(kind, data_dir)
        .with_context(|| format!("clean {} roster in {}", kind.label(), data_dir.display()))?;
    print_summary(kind, &outcome);
    Ok(())
}
