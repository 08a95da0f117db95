//! Phone number normalization for the staff export.

/// Extension placeholder the vendor export leaves on unanswered fields.
const EXTENSION_PLACEHOLDER: &str = "x___";

/// Reduce a phone value to digits and a leading `+`.
///
/// The literal extension placeholder is dropped first, then every
/// character that is not a digit or `+`. A leading `00` international
/// prefix is rewritten as `+`.
pub fn normalize_phone(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let without_extension = value.replace(EXTENSION_PLACEHOLDER, "");
    let cleaned: String = without_extension
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();
    if let Some(rest) = cleaned.strip_prefix("00") {
        return format!("+{rest}");
    }
    cleaned
}
