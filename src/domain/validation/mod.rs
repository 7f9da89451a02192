//! Validation pipeline gating access and data entry.
//!
//! Pure, side-effect-free predicates over strings plus declarative rule sets.
//! A validation pass fails softly: it returns the ordered list of failure
//! messages and never errors or panics.

mod predicates;
mod rules;

pub use predicates::{
    is_contact, is_email, is_non_empty, is_numeric_id, is_phone, DOCUMENT_MAX_LEN,
    DOCUMENT_MIN_LEN, PHONE_LEN,
};
pub use rules::{check, contact_form_rules, login_rules, FieldRule};
