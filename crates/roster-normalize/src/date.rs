//! Date of birth normalization to ISO `YYYY-MM-DD`.

use chrono::NaiveDate;

/// Normalize a US-style date of birth to `YYYY-MM-DD`.
///
/// Accepts `MM/DD/YYYY` and `MM/DD/YY`. The format is chosen by the width
/// of the year token; chrono's `%Y` would otherwise accept a two-digit
/// year as-is and produce year 85 instead of 1985. Values that parse as
/// neither format pass through unchanged; downstream consumers handle
/// unparsed dates.
pub fn normalize_dob(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let format = match trimmed.rsplit('/').next().map_or(0, str::len) {
        4 => "%m/%d/%Y",
        2 => "%m/%d/%y",
        _ => return trimmed.to_string(),
    };
    match NaiveDate::parse_from_str(trimmed, format) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => trimmed.to_string(),
    }
}
