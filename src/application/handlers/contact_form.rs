//! ContactFormHandler - validates a contact-form submission.
//!
//! Message delivery is an external effect; on success the handler returns a
//! receipt the presenter can render as the confirmation summary.

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::validation::{check, contact_form_rules};

/// Submitted contact-form values. The phone is optional and not validated.
#[derive(Debug, Clone)]
pub struct ContactFormCommand {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub reason: String,
    pub message: String,
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Contact-form failure: the ordered validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("contact form validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Handler for the contact-form submit.
#[derive(Debug, Default)]
pub struct ContactFormHandler;

impl ContactFormHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ContactFormCommand) -> Result<ContactReceipt, ContactFormError> {
        let failures = check(&contact_form_rules(), |field| match field {
            "name" => cmd.name.as_str(),
            "email" => cmd.email.as_str(),
            "reason" => cmd.reason.as_str(),
            "message" => cmd.message.as_str(),
            _ => "",
        });

        if !failures.is_empty() {
            warn!(failures = failures.len(), "contact form rejected");
            return Err(ContactFormError::Validation(failures));
        }

        info!(reason = %cmd.reason, "contact form accepted");

        Ok(ContactReceipt {
            name: cmd.name,
            email: cmd.email,
            phone: (!cmd.phone.is_empty()).then_some(cmd.phone),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_command() -> ContactFormCommand {
        ContactFormCommand {
            name: "Ana María".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            reason: "appointments".to_string(),
            message: "I need to move my next appointment.".to_string(),
        }
    }

    #[test]
    fn valid_submission_yields_a_receipt() {
        let receipt = ContactFormHandler::new().handle(valid_command()).unwrap();
        assert_eq!(receipt.name, "Ana María");
        assert_eq!(receipt.phone, None);
    }

    #[test]
    fn provided_phone_is_echoed_in_the_receipt() {
        let mut cmd = valid_command();
        cmd.phone = "3001234567".to_string();
        let receipt = ContactFormHandler::new().handle(cmd).unwrap();
        assert_eq!(receipt.phone, Some("3001234567".to_string()));
    }

    #[test]
    fn empty_submission_fails_every_rule_in_order() {
        let err = ContactFormHandler::new()
            .handle(ContactFormCommand {
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                reason: String::new(),
                message: String::new(),
            })
            .unwrap_err();

        let ContactFormError::Validation(messages) = err;
        assert_eq!(
            messages,
            vec![
                "Name must be at least 3 characters".to_string(),
                "Enter a valid email address".to_string(),
                "Select a contact reason".to_string(),
                "Message must be at least 10 characters".to_string(),
            ]
        );
    }

    #[test]
    fn short_message_is_the_only_failure_reported() {
        let mut cmd = valid_command();
        cmd.message = "too short".to_string();
        let err = ContactFormHandler::new().handle(cmd).unwrap_err();

        let ContactFormError::Validation(messages) = err;
        assert_eq!(messages, vec!["Message must be at least 10 characters"]);
    }
}
