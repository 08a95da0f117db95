//! Run summary table printed after a successful import.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_core::ImportOutcome;
use roster_model::ImportKind;

pub fn print_summary(kind: ImportKind, outcome: &ImportOutcome) {
    let report = &outcome.report;
    println!("Import: {kind}");
    println!("Cleaned CSV: {}", outcome.cleaned_path.display());
    println!("Report: {}", outcome.report_path.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Count")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Rows written"), Cell::new(report.rows_written)]);
    table.add_row(vec![
        Cell::new("Placeholder emails assigned"),
        count_cell(report.placeholder_emails_assigned.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate emails"),
        count_cell(report.duplicate_emails.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate client IDs"),
        count_cell(report.duplicate_client_ids.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Rows with missing fields"),
        count_cell(report.missing_required_rows.len(), Color::Yellow),
    ]);
    println!("{table}");

    if report.added_email_column {
        println!("Note: no email column in the source; an Email column was appended.");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}
