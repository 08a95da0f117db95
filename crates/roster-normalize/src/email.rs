//! Email normalization and placeholder synthesis.

use std::collections::BTreeMap;

/// Characters stripped from placeholder base candidates. These show up in
/// client IDs and names but are not valid in an email local part.
const SANITIZE_STRIP: &[char] = &[' ', '/', '#', '@', ','];

/// Lowercase and trim an email value.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Build a `first.last` placeholder base from name cells, lowercased with
/// spaces removed. Empty when both names are empty.
pub fn name_candidate(first: &str, last: &str) -> String {
    let first = first.to_lowercase().replace(' ', "");
    let last = last.to_lowercase().replace(' ', "");
    format!("{first}.{last}").trim_matches('.').to_string()
}

/// Synthesizes deterministic, run-unique placeholder email addresses.
///
/// Repeated sanitized bases get `-1`, `-2`, ... suffixes in order of
/// appearance, so no two placeholders within one run collide.
#[derive(Debug, Default)]
pub struct PlaceholderEmails {
    domain: String,
    used: BTreeMap<String, u32>,
}

impl PlaceholderEmails {
    /// Create a synthesizer appending `@<domain>` to every address.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            used: BTreeMap::new(),
        }
    }

    /// Synthesize an address from a base candidate.
    ///
    /// The candidate is lowercased and stripped of spaces and `/ # @ ,`;
    /// if nothing survives, `row<fallback_row>` is used instead.
    pub fn assign(&mut self, candidate: &str, fallback_row: u32) -> String {
        let mut base = sanitize(candidate);
        if base.is_empty() {
            base = format!("row{fallback_row}");
        }
        let seen = self.used.entry(base.clone()).or_insert(0);
        let suffix = *seen;
        *seen += 1;
        if suffix > 0 {
            base = format!("{base}-{suffix}");
        }
        format!("{base}@{}", self.domain)
    }
}

fn sanitize(candidate: &str) -> String {
    candidate
        .to_lowercase()
        .chars()
        .filter(|ch| !SANITIZE_STRIP.contains(ch))
        .collect()
}
