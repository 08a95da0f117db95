//! Resolving known columns against a discovered header row.

use std::collections::BTreeMap;

use roster_model::{ImportKind, columns};

/// Positions of the columns an import normalizes or inspects.
///
/// Every field is optional: the vendor exports drift, and a column absent
/// from the header is silently skipped rather than treated as an error.
#[derive(Debug, Clone, Default)]
pub struct ColumnLayout {
    /// `State` column, both imports.
    pub state: Option<usize>,
    /// `DOB` column, client import only.
    pub dob: Option<usize>,
    /// `Phone` column, staff import only.
    pub phone: Option<usize>,
    /// `Email` column, exact name match.
    pub email: Option<usize>,
    /// `First Name` column, client import only.
    pub first_name: Option<usize>,
    /// `Last Name` column, client import only.
    pub last_name: Option<usize>,
    /// First column whose name contains `client id` case-insensitively.
    pub client_id: Option<usize>,
}

/// Map each header name to its first position. Later duplicates lose.
pub fn header_index(headers: &[String]) -> BTreeMap<&str, usize> {
    let mut index = BTreeMap::new();
    for (position, header) in headers.iter().enumerate() {
        index.entry(header.trim()).or_insert(position);
    }
    index
}

impl ColumnLayout {
    /// Resolve the columns relevant to `kind` against scrubbed headers.
    pub fn resolve(headers: &[String], kind: ImportKind) -> Self {
        let index = header_index(headers);
        let mut layout = Self {
            state: index.get(columns::STATE).copied(),
            email: index.get(columns::EMAIL).copied(),
            ..Self::default()
        };
        match kind {
            ImportKind::Client => {
                layout.dob = index.get(columns::DOB).copied();
                layout.first_name = index.get(columns::FIRST_NAME).copied();
                layout.last_name = index.get(columns::LAST_NAME).copied();
                layout.client_id = headers
                    .iter()
                    .find(|name| name.to_lowercase().contains(columns::CLIENT_ID_FRAGMENT))
                    .and_then(|name| index.get(name.trim()).copied());
            }
            ImportKind::Staff => {
                layout.phone = index.get(columns::PHONE).copied();
            }
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn first_occurrence_wins_on_duplicate_headers() {
        let headers = headers(&["State", "Email", "State"]);
        let index = header_index(&headers);
        assert_eq!(index.get("State"), Some(&0));
    }

    #[test]
    fn client_layout_finds_client_id_variants() {
        let headers = headers(&["First Name", "Last Name", "Client ID #", "DOB"]);
        let layout = ColumnLayout::resolve(&headers, ImportKind::Client);
        assert_eq!(layout.client_id, Some(2));
        assert_eq!(layout.dob, Some(3));
        assert_eq!(layout.phone, None);
    }

    #[test]
    fn staff_layout_skips_client_columns() {
        let headers = headers(&["Account Organization Name", "Phone", "Email", "DOB"]);
        let layout = ColumnLayout::resolve(&headers, ImportKind::Staff);
        assert_eq!(layout.phone, Some(1));
        assert_eq!(layout.email, Some(2));
        assert_eq!(layout.dob, None);
        assert_eq!(layout.client_id, None);
    }

    #[test]
    fn absent_columns_resolve_to_none() {
        let headers = headers(&["First Name", "Last Name"]);
        let layout = ColumnLayout::resolve(&headers, ImportKind::Client);
        assert_eq!(layout.state, None);
        assert_eq!(layout.email, None);
    }
}
