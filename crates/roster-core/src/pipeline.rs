//! Single-pass import pipeline: read, clean, accumulate, write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use roster_ingest::{read_roster_table, scrub_cell};
use roster_model::{
    ImportError, ImportKind, ImportReport, MissingFields, PLACEHOLDER_DOMAIN,
    PlaceholderAssignment, columns,
};
use roster_normalize::{
    PlaceholderEmails, name_candidate, normalize_dob, normalize_email, normalize_phone,
    normalize_state,
};

use crate::columns::ColumnLayout;

/// Result of one import run.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Diagnostics written to the report file.
    pub report: ImportReport,
    /// Where the cleaned CSV was written.
    pub cleaned_path: PathBuf,
    /// Where the JSON report was written.
    pub report_path: PathBuf,
}

/// Run one import end to end.
///
/// Reads `<data_dir>/<kind>_raw.csv`, writes the cleaned CSV and the JSON
/// diagnostics report at their conventional paths, overwriting previous
/// runs. Row-level defects are normalized or reported, never fatal.
///
/// # Errors
///
/// Fails only on a missing source file, an unlocatable header row, or an
/// unreadable/unwritable file. Nothing is written on failure before the
/// output stage.
pub fn run_import(kind: ImportKind, data_dir: &Path) -> Result<ImportOutcome, ImportError> {
    let raw_path = kind.raw_path(data_dir);
    info!(import = %kind, path = %raw_path.display(), "starting import");
    let table = read_roster_table(&raw_path, kind)?;

    let mut headers = table.headers.clone();
    let mut added_email_column = false;
    if kind.synthesizes_emails()
        && !headers
            .iter()
            .any(|header| header.eq_ignore_ascii_case(columns::EMAIL))
    {
        headers.push(columns::EMAIL.to_string());
        added_email_column = true;
        debug!(import = %kind, "no email column in header, appending one");
    }
    let layout = ColumnLayout::resolve(&headers, kind);

    let mut processed: Vec<Vec<String>> = Vec::new();
    let mut email_rows: BTreeMap<String, Vec<u32>> = BTreeMap::new();
    let mut client_id_rows: BTreeMap<String, Vec<u32>> = BTreeMap::new();
    let mut missing_required_rows: Vec<MissingFields> = Vec::new();
    let mut missing_email_rows: Vec<u32> = Vec::new();
    let mut placeholder_emails_assigned: Vec<PlaceholderAssignment> = Vec::new();
    let mut placeholders = PlaceholderEmails::new(PLACEHOLDER_DOMAIN);

    for (offset, raw_row) in table.rows.iter().enumerate() {
        let row_num = table.first_data_row_number() + offset as u32;
        let mut row: Vec<String> = raw_row.iter().map(|cell| scrub_cell(cell)).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        // Pad short rows, drop malformed trailing cells on long ones.
        row.resize(headers.len(), String::new());

        if let Some(idx) = layout.state {
            row[idx] = normalize_state(&row[idx]);
        }
        if let Some(idx) = layout.dob {
            row[idx] = normalize_dob(&row[idx]);
        }
        if let Some(idx) = layout.phone {
            row[idx] = normalize_phone(&row[idx]);
        }

        match layout.email {
            Some(idx) => {
                let email = normalize_email(&row[idx]);
                row[idx] = email.clone();
                if email.is_empty() {
                    if kind.synthesizes_emails() {
                        let candidate = placeholder_candidate(&row, &layout);
                        let output_position = processed.len() as u32 + 1;
                        let assigned = placeholders.assign(&candidate, output_position);
                        row[idx] = assigned.clone();
                        placeholder_emails_assigned.push(PlaceholderAssignment {
                            row: row_num,
                            email: assigned.clone(),
                        });
                        // Placeholders join duplicate tracking too, so a
                        // collision with a real address would surface.
                        email_rows.entry(assigned).or_default().push(row_num);
                    }
                } else {
                    email_rows.entry(email).or_default().push(row_num);
                }
            }
            None => {
                if kind.synthesizes_emails() {
                    missing_email_rows.push(row_num);
                }
            }
        }

        if let Some(idx) = layout.client_id {
            let value = row[idx].clone();
            if !value.is_empty() {
                client_id_rows.entry(value).or_default().push(row_num);
            }
        }

        if kind == ImportKind::Client {
            let missing = missing_fields(&row, &layout);
            if !missing.is_empty() {
                missing_required_rows.push(MissingFields {
                    row: row_num,
                    fields: missing,
                });
            }
        }

        processed.push(row);
    }

    let report = ImportReport {
        rows_written: processed.len(),
        added_email_column,
        missing_required_rows,
        missing_email_rows,
        duplicate_emails: duplicates_only(email_rows),
        duplicate_client_ids: duplicates_only(client_id_rows),
        placeholder_emails_assigned,
    };

    let cleaned_path = kind.cleaned_path(data_dir);
    let report_path = kind.report_path(data_dir);
    write_cleaned_csv(&cleaned_path, &headers, &processed)?;
    write_report(&report_path, &report)?;

    info!(
        import = %kind,
        rows_written = report.rows_written,
        duplicate_emails = report.duplicate_emails.len(),
        duplicate_client_ids = report.duplicate_client_ids.len(),
        placeholders = report.placeholder_emails_assigned.len(),
        "import complete"
    );

    Ok(ImportOutcome {
        report,
        cleaned_path,
        report_path,
    })
}

/// Base candidate for a placeholder email: client ID first, then
/// `first.last`, empty otherwise (the synthesizer falls back to the row
/// position).
fn placeholder_candidate(row: &[String], layout: &ColumnLayout) -> String {
    if let Some(idx) = layout.client_id {
        if !row[idx].is_empty() {
            return row[idx].clone();
        }
    }
    if let (Some(first), Some(last)) = (layout.first_name, layout.last_name) {
        return name_candidate(&row[first], &row[last]);
    }
    String::new()
}

/// Required-field check for client rows. A synthesized placeholder email
/// has already been written into the row, so it counts as present.
fn missing_fields(row: &[String], layout: &ColumnLayout) -> Vec<String> {
    let checks = [
        (layout.first_name, "first_name"),
        (layout.last_name, "last_name"),
        (layout.email, "email"),
        (layout.dob, "date_of_birth"),
    ];
    checks
        .iter()
        .filter_map(|(idx, name)| match idx {
            Some(idx) if row[*idx].is_empty() => Some((*name).to_string()),
            _ => None,
        })
        .collect()
}

/// Keep only keys observed on two or more rows.
fn duplicates_only(map: BTreeMap<String, Vec<u32>>) -> BTreeMap<String, Vec<u32>> {
    map.into_iter()
        .filter(|(_, rows)| rows.len() > 1)
        .collect()
}

fn write_cleaned_csv(
    path: &Path,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<(), ImportError> {
    let csv_error = |source: csv::Error| ImportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| ImportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(path: &Path, report: &ImportReport) -> Result<(), ImportError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| ImportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::duplicates_only;
    use std::collections::BTreeMap;

    #[test]
    fn singletons_are_dropped_from_duplicate_maps() {
        let mut map = BTreeMap::new();
        map.insert("a@example.com".to_string(), vec![2]);
        map.insert("b@example.com".to_string(), vec![3, 5]);
        let duplicates = duplicates_only(map);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates["b@example.com"], vec![3, 5]);
    }
}
