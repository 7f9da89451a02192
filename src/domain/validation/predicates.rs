//! Pure predicates over user-submitted strings.

/// Minimum number of digits in an identity document.
pub const DOCUMENT_MIN_LEN: usize = 6;

/// Maximum number of digits in an identity document.
pub const DOCUMENT_MAX_LEN: usize = 12;

/// Exact length of a mobile phone number.
pub const PHONE_LEN: usize = 10;

/// Returns true if `doc` is a plausible identity document number:
/// non-empty, 6 to 12 characters, ASCII digits only.
pub fn is_numeric_id(doc: &str) -> bool {
    if doc.len() < DOCUMENT_MIN_LEN || doc.len() > DOCUMENT_MAX_LEN {
        return false;
    }
    doc.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` contains both `@` and `.`.
///
/// Deliberately permissive, not RFC 5322: the portal only needs a sanity
/// check before handing the address to the notification service.
pub fn is_email(s: &str) -> bool {
    s.contains('@') && s.contains('.')
}

/// Returns true if `s` is exactly ten ASCII digits.
pub fn is_phone(s: &str) -> bool {
    s.len() == PHONE_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` is a usable contact: an email when it contains `@`,
/// otherwise a ten-digit phone number.
pub fn is_contact(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    if s.contains('@') {
        is_email(s)
    } else {
        is_phone(s)
    }
}

/// Returns true if `s` is non-empty and at least `min_len` characters long.
///
/// Counts characters, not bytes, so accented input is measured the way the
/// user reads it. No trimming: surrounding whitespace counts toward the
/// length, matching the portal's historical behaviour.
pub fn is_non_empty(s: &str, min_len: usize) -> bool {
    !s.is_empty() && s.chars().count() >= min_len
}
