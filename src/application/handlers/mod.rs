//! Command handlers driven by presenter callbacks.
//!
//! Each handler maps 1:1 to a user intent: login submit, confirm click,
//! cancel click, claim click, contact-form submit. Handlers consult the
//! affirmation gate before mutating anything; a declined gate abandons the
//! operation with zero side effects.

mod cancel_appointment;
mod claim_slot;
mod confirm_appointment;
mod contact_form;
mod login;

pub use cancel_appointment::{CancelAppointmentHandler, CancelOutcome};
pub use claim_slot::{ClaimOutcome, ClaimSlotHandler};
pub use confirm_appointment::{ConfirmAppointmentHandler, ConfirmOutcome};
pub use contact_form::{ContactFormCommand, ContactFormError, ContactFormHandler, ContactReceipt};
pub use login::{LoginCommand, LoginError, LoginHandler, LoginOutcome};
