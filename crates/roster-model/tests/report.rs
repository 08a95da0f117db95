//! Serialization shape tests for the diagnostics report.

use std::collections::BTreeMap;

use roster_model::{ImportReport, MissingFields, PlaceholderAssignment};

#[test]
fn report_serializes_all_fields() {
    let mut duplicate_emails = BTreeMap::new();
    duplicate_emails.insert("dup@example.com".to_string(), vec![4, 9]);

    let report = ImportReport {
        rows_written: 3,
        added_email_column: true,
        missing_required_rows: vec![MissingFields {
            row: 5,
            fields: vec!["last_name".to_string()],
        }],
        missing_email_rows: vec![],
        duplicate_emails,
        duplicate_client_ids: BTreeMap::new(),
        placeholder_emails_assigned: vec![PlaceholderAssignment {
            row: 4,
            email: "jane.doe@clients.placeholder.local".to_string(),
        }],
    };

    let json = serde_json::to_string_pretty(&report).expect("serialize report");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse report");

    assert_eq!(value["rows_written"], 3);
    assert_eq!(value["added_email_column"], true);
    assert_eq!(value["missing_required_rows"][0]["row"], 5);
    assert_eq!(value["missing_required_rows"][0]["fields"][0], "last_name");
    assert_eq!(value["duplicate_emails"]["dup@example.com"][1], 9);
    assert_eq!(
        value["placeholder_emails_assigned"][0]["email"],
        "jane.doe@clients.placeholder.local"
    );
    // Empty collections still serialize, keeping the report shape stable.
    assert!(value["duplicate_client_ids"].as_object().unwrap().is_empty());
    assert!(value["missing_email_rows"].as_array().unwrap().is_empty());
}

#[test]
fn report_round_trips() {
    let report = ImportReport {
        rows_written: 10,
        ..ImportReport::default()
    };
    let json = serde_json::to_string(&report).expect("serialize");
    let back: ImportReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, report);
}
