//! Normalizer behavior tests.

use roster_normalize::{
    PlaceholderEmails, name_candidate, normalize_dob, normalize_email, normalize_phone,
    normalize_state,
};

#[test]
fn state_full_name_and_abbreviation() {
    assert_eq!(normalize_state("california"), "CA");
    assert_eq!(normalize_state("California"), "CA");
    assert_eq!(normalize_state("CA"), "CA");
    assert_eq!(normalize_state("ca"), "CA");
    assert_eq!(normalize_state("District of Columbia"), "DC");
}

#[test]
fn state_unrecognized_passes_through() {
    assert_eq!(normalize_state("Atlantis"), "Atlantis");
    assert_eq!(normalize_state(""), "");
    assert_eq!(normalize_state("  Texas  "), "TX");
}

#[test]
fn dob_four_and_two_digit_years() {
    assert_eq!(normalize_dob("01/02/1990"), "1990-01-02");
    assert_eq!(normalize_dob("12/31/05"), "2005-12-31");
    assert_eq!(normalize_dob("07/04/76"), "1976-07-04");
}

#[test]
fn dob_unparsable_passes_through() {
    assert_eq!(normalize_dob("13/45/1990"), "13/45/1990");
    assert_eq!(normalize_dob("born in spring"), "born in spring");
    assert_eq!(normalize_dob(""), "");
}

#[test]
fn phone_strips_formatting_and_extension() {
    assert_eq!(normalize_phone("(555) 123-4567 x___"), "5551234567");
    assert_eq!(normalize_phone("555.123.4567"), "5551234567");
    assert_eq!(normalize_phone(""), "");
}

#[test]
fn phone_international_prefix() {
    assert_eq!(normalize_phone("0015551234567"), "+15551234567");
    assert_eq!(normalize_phone("+1 (555) 123-4567"), "+15551234567");
}

#[test]
fn email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Jane.Doe@Example.COM "), "jane.doe@example.com");
    assert_eq!(normalize_email(""), "");
}

#[test]
fn name_candidate_joins_and_strips_dots() {
    assert_eq!(name_candidate("Jane", "Doe"), "jane.doe");
    assert_eq!(name_candidate("Mary Ann", "De La Cruz"), "maryann.delacruz");
    assert_eq!(name_candidate("Jane", ""), "jane");
    assert_eq!(name_candidate("", ""), "");
}

#[test]
fn placeholders_are_unique_within_a_run() {
    let mut emails = PlaceholderEmails::new("clients.placeholder.local");
    assert_eq!(
        emails.assign("jane.doe", 1),
        "jane.doe@clients.placeholder.local"
    );
    assert_eq!(
        emails.assign("jane.doe", 2),
        "jane.doe-1@clients.placeholder.local"
    );
    assert_eq!(
        emails.assign("jane.doe", 3),
        "jane.doe-2@clients.placeholder.local"
    );
    assert_eq!(
        emails.assign("john.smith", 4),
        "john.smith@clients.placeholder.local"
    );
}

#[test]
fn placeholder_sanitizes_candidate() {
    let mut emails = PlaceholderEmails::new("clients.placeholder.local");
    assert_eq!(
        emails.assign("CL/2024 #17", 1),
        "cl202417@clients.placeholder.local"
    );
}

#[test]
fn placeholder_falls_back_to_row_number() {
    let mut emails = PlaceholderEmails::new("clients.placeholder.local");
    assert_eq!(emails.assign("", 7), "row7@clients.placeholder.local");
    // A candidate that sanitizes to nothing also falls back.
    assert_eq!(emails.assign("@@@", 8), "row8@clients.placeholder.local");
}
