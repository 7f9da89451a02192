//! LoginHandler - validates identity data and opens a session.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::appointment::AppointmentStore;
use crate::domain::session::Session;
use crate::domain::validation::{check, login_rules};
use crate::ports::SeedSource;

/// Command carrying the submitted login form values.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub document_id: String,
    pub contact: String,
}

/// Result of a successful login: the bound session plus a store whose
/// active list was freshly populated from the seed template.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session: Session,
    pub store: AppointmentStore,
}

/// Login failure: the ordered validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("login validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Handler gating portal access.
///
/// Runs the login rule set; on failure returns the ordered messages with no
/// session created and no state touched. On success it binds the identity
/// and seeds the session's appointment store - the sole trigger that
/// populates an active list.
pub struct LoginHandler {
    seed: Arc<dyn SeedSource>,
}

impl LoginHandler {
    pub fn new(seed: Arc<dyn SeedSource>) -> Self {
        Self { seed }
    }

    pub fn handle(&self, cmd: LoginCommand) -> Result<LoginOutcome, LoginError> {
        let failures = check(&login_rules(), |field| match field {
            "document" => cmd.document_id.as_str(),
            "contact" => cmd.contact.as_str(),
            _ => "",
        });

        if !failures.is_empty() {
            warn!(failures = failures.len(), "login rejected by validation");
            return Err(LoginError::Validation(failures));
        }

        let store = AppointmentStore::with_seed(
            self.seed.template_appointments(),
            self.seed.initial_slots(),
        );
        let session = Session::new(cmd.document_id, cmd.contact);

        info!(
            document = %session.document_id(),
            appointments = store.list_active().len(),
            slots = store.list_available().len(),
            "login succeeded"
        );

        Ok(LoginOutcome { session, store })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seed::FixtureSeed;
    use crate::domain::foundation::AppointmentId;

    fn handler() -> LoginHandler {
        LoginHandler::new(Arc::new(FixtureSeed::demo()))
    }

    #[test]
    fn valid_credentials_open_a_seeded_session() {
        let outcome = handler()
            .handle(LoginCommand {
                document_id: "123456".to_string(),
                contact: "a@b.com".to_string(),
            })
            .unwrap();

        assert_eq!(outcome.session.document_id(), "123456");
        assert_eq!(outcome.store.list_active().len(), 2);
        assert_eq!(outcome.store.list_active()[0].id(), AppointmentId::new(1));
        assert_eq!(outcome.store.list_active()[1].id(), AppointmentId::new(2));
        assert_eq!(outcome.store.list_available().len(), 1);
    }

    #[test]
    fn phone_contact_is_accepted() {
        let result = handler().handle(LoginCommand {
            document_id: "123456789".to_string(),
            contact: "3001234567".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn short_document_fails_with_digit_length_message() {
        let err = handler()
            .handle(LoginCommand {
                document_id: "12".to_string(),
                contact: "a@b.com".to_string(),
            })
            .unwrap_err();

        let LoginError::Validation(messages) = err;
        assert_eq!(messages, vec!["Document must be 6 to 12 numeric digits"]);
    }

    #[test]
    fn both_failures_are_reported_in_rule_order() {
        let err = handler()
            .handle(LoginCommand {
                document_id: "abc".to_string(),
                contact: "nope".to_string(),
            })
            .unwrap_err();

        let LoginError::Validation(messages) = err;
        assert_eq!(
            messages,
            vec![
                "Document must be 6 to 12 numeric digits".to_string(),
                "Enter a valid email or a 10-digit mobile number".to_string(),
            ]
        );
    }
}
