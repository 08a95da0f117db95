//! Pure field normalizers shared by the roster importers.
//!
//! Every normalizer is lenient: values it cannot interpret pass through
//! unchanged so a single bad cell never rejects a whole import.

pub mod date;
pub mod email;
pub mod phone;
pub mod state;

pub use date::normalize_dob;
pub use email::{PlaceholderEmails, name_candidate, normalize_email};
pub use phone::normalize_phone;
pub use state::normalize_state;
