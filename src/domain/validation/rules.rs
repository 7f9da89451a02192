//! Declarative validation rule sets.
//!
//! Each rule names the field it reads, the predicate it applies, and the
//! message reported when the predicate fails. A pass runs every rule and
//! collects the failing messages in declaration order.

use super::predicates::{is_contact, is_email, is_non_empty, is_numeric_id};

/// A single field-level validation rule.
pub struct FieldRule {
    /// Field the rule reads from the value set.
    pub field: &'static str,
    /// Predicate that must hold for the field value.
    pub predicate: fn(&str) -> bool,
    /// Message reported when the predicate fails.
    pub message: &'static str,
}

/// Runs every rule against the values and returns the failure messages in
/// declaration order. An empty result means the value set is valid.
///
/// `value_of` maps a field name to its submitted value; unknown fields
/// should map to `""`.
pub fn check<'a, F>(rules: &[FieldRule], value_of: F) -> Vec<String>
where
    F: Fn(&'static str) -> &'a str,
{
    rules
        .iter()
        .filter(|rule| !(rule.predicate)(value_of(rule.field)))
        .map(|rule| rule.message.to_string())
        .collect()
}

/// Rules gating portal access: identity document plus a reachable contact.
pub fn login_rules() -> Vec<FieldRule> {
    vec![
        FieldRule {
            field: "document",
            predicate: is_numeric_id,
            message: "Document must be 6 to 12 numeric digits",
        },
        FieldRule {
            field: "contact",
            predicate: is_contact,
            message: "Enter a valid email or a 10-digit mobile number",
        },
    ]
}

/// Rules for the contact form.
pub fn contact_form_rules() -> Vec<FieldRule> {
    vec![
        FieldRule {
            field: "name",
            predicate: |v| is_non_empty(v, 3),
            message: "Name must be at least 3 characters",
        },
        FieldRule {
            field: "email",
            predicate: is_email,
            message: "Enter a valid email address",
        },
        FieldRule {
            field: "reason",
            predicate: |v| is_non_empty(v, 1),
            message: "Select a contact reason",
        },
        FieldRule {
            field: "message",
            predicate: |v| is_non_empty(v, 10),
            message: "Message must be at least 10 characters",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_returns_empty_for_valid_values() {
        let failures = check(&login_rules(), |field| match field {
            "document" => "123456",
            "contact" => "a@b.com",
            _ => "",
        });
        assert!(failures.is_empty());
    }

    #[test]
    fn check_collects_messages_in_declaration_order() {
        let failures = check(&login_rules(), |_| "");
        assert_eq!(
            failures,
            vec![
                "Document must be 6 to 12 numeric digits".to_string(),
                "Enter a valid email or a 10-digit mobile number".to_string(),
            ]
        );
    }

    #[test]
    fn check_reports_only_the_failing_rule() {
        let failures = check(&login_rules(), |field| match field {
            "document" => "12",
            "contact" => "3001234567",
            _ => "",
        });
        assert_eq!(failures, vec!["Document must be 6 to 12 numeric digits"]);
    }

    #[test]
    fn contact_form_rules_all_fail_on_empty_submission() {
        let failures = check(&contact_form_rules(), |_| "");
        assert_eq!(
            failures,
            vec![
                "Name must be at least 3 characters".to_string(),
                "Enter a valid email address".to_string(),
                "Select a contact reason".to_string(),
                "Message must be at least 10 characters".to_string(),
            ]
        );
    }

    #[test]
    fn contact_form_counts_characters_not_bytes() {
        let failures = check(&contact_form_rules(), |field| match field {
            "name" => "ñé",           // two characters, four bytes
            "email" => "ana@example.com",
            "reason" => "appointments",
            "message" => "señor ñus", // nine characters, eleven bytes
            _ => "",
        });
        assert_eq!(
            failures,
            vec![
                "Name must be at least 3 characters".to_string(),
                "Message must be at least 10 characters".to_string(),
            ]
        );
    }

    #[test]
    fn contact_form_accepts_a_complete_submission() {
        let failures = check(&contact_form_rules(), |field| match field {
            "name" => "Ana María",
            "email" => "ana@example.com",
            "reason" => "appointments",
            "message" => "I need to move my next appointment.",
            _ => "",
        });
        assert!(failures.is_empty());
    }
}
