//! Header discovery and scrubbing tests against on-disk fixtures.

use std::io::Write;

use roster_ingest::{locate_header, read_roster_table, scrub_cell};
use roster_model::{ImportError, ImportKind};

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[test]
fn scrub_replaces_newlines_and_trims() {
    assert_eq!(scrub_cell("  123 Main St\r\nApt 4  "), "123 Main St  Apt 4");
    assert_eq!(scrub_cell("\u{feff}First Name"), "First Name");
    assert_eq!(scrub_cell("   "), "");
}

#[test]
fn header_found_after_banner_rows() {
    let fixture = write_fixture(
        "Exported by Vendor Portal,,\n\
         ,,\n\
         First Name,Last Name,State\n\
         Jane,Doe,CA\n",
    );
    let table = read_roster_table(fixture.path(), ImportKind::Client).expect("read table");
    assert_eq!(table.header_row, 2);
    assert_eq!(table.headers, vec!["First Name", "Last Name", "State"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.first_data_row_number(), 4);
}

#[test]
fn header_anchors_require_all_columns() {
    let rows = vec![
        vec!["First Name".to_string(), "Notes".to_string()],
        vec!["First Name".to_string(), "Last Name".to_string()],
    ];
    assert_eq!(locate_header(&rows, &["First Name", "Last Name"]), Some(1));
    assert_eq!(locate_header(&rows, &["Account Organization Name"]), None);
}

#[test]
fn header_cells_are_scrubbed_before_matching() {
    let rows = vec![vec![
        " First Name \n".to_string(),
        "Last Name".to_string(),
    ]];
    assert_eq!(locate_header(&rows, &["First Name", "Last Name"]), Some(0));
}

#[test]
fn missing_header_is_fatal() {
    let fixture = write_fixture("Name,Phone\nJane,555\n");
    let error = read_roster_table(fixture.path(), ImportKind::Staff).unwrap_err();
    assert!(matches!(error, ImportError::HeaderNotFound { import: "staff", .. }));
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.csv");
    let error = read_roster_table(&path, ImportKind::Client).unwrap_err();
    assert!(matches!(error, ImportError::SourceMissing(_)));
}

#[test]
fn rows_keep_original_widths() {
    let fixture = write_fixture(
        "First Name,Last Name,State\n\
         Jane,Doe\n\
         John,Smith,WA,extra\n",
    );
    let table = read_roster_table(fixture.path(), ImportKind::Client).expect("read table");
    assert_eq!(table.rows[0].len(), 2);
    assert_eq!(table.rows[1].len(), 4);
}
