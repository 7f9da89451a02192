//! Session - the authenticated identity bound at login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity bound to a successful login.
///
/// # Ownership
///
/// A session holds only the identity. Appointment state lives in the
/// `AppointmentStore` created alongside it; the session never duplicates it.
/// There is no explicit logout: the session ends with the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    document_id: String,
    contact: String,
    logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Binds an identity that already passed the login validation rules.
    pub fn new(document_id: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            contact: contact.into(),
            logged_in_at: Utc::now(),
        }
    }

    /// Returns the identity document number.
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Returns the contact (email or phone).
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns when the session was created.
    pub fn logged_in_at(&self) -> DateTime<Utc> {
        self.logged_in_at
    }

    /// True when the contact is an email address rather than a phone number.
    /// Notification delivery itself is an external effect.
    pub fn contact_is_email(&self) -> bool {
        self.contact.contains('@')
    }
}
