//! CancelAppointmentHandler - cancels an appointment and releases its slot.
//!
//! Two gates guard the mutation: a text prompt for the cancellation reason
//! and a yes/no confirmation. Dismissing the prompt or declining the
//! confirmation abandons the operation with zero side effects; an empty
//! reason aborts with an explicit signal.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::appointment::{Appointment, AppointmentError, AppointmentStore, AvailabilitySlot};
use crate::domain::foundation::AppointmentId;
use crate::ports::AffirmationGate;

/// Prompt asking for the cancellation reason.
pub const REASON_PROMPT: &str =
    "Why do you want to cancel your appointment? This helps us improve the service.";

/// Question asked before the cancellation is applied.
pub const CANCEL_PROMPT: &str = "Are you sure you want to cancel this appointment? \
This will release the slot to other patients.";

/// Result of a cancel attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Appointment cancelled; carries the updated record and the slot that
    /// went back into the pool. Waitlist notification is an external effect.
    Cancelled {
        appointment: Appointment,
        released: AvailabilitySlot,
    },
    /// The user dismissed the prompt or declined the confirmation.
    Declined,
}

/// Handler for the presenter's cancel click.
pub struct CancelAppointmentHandler {
    gate: Arc<dyn AffirmationGate>,
}

impl CancelAppointmentHandler {
    pub fn new(gate: Arc<dyn AffirmationGate>) -> Self {
        Self { gate }
    }

    /// Prompts for a reason, asks for confirmation, then cancels.
    ///
    /// # Errors
    ///
    /// - `ReasonRequired` if the reason is submitted empty
    /// - `NotFound` if the id is not in the active list
    /// - `InvalidTransition` if the appointment is already Cancelled
    pub fn handle(
        &self,
        store: &mut AppointmentStore,
        id: AppointmentId,
    ) -> Result<CancelOutcome, AppointmentError> {
        let reason = match self.gate.prompt_text(REASON_PROMPT) {
            Some(reason) => reason,
            None => {
                info!(%id, "cancel abandoned at the reason prompt");
                return Ok(CancelOutcome::Declined);
            }
        };

        if reason.is_empty() {
            warn!(%id, "cancel rejected: no reason given");
            return Err(AppointmentError::ReasonRequired);
        }

        if !self.gate.confirm(CANCEL_PROMPT) {
            info!(%id, "cancel declined at the gate");
            return Ok(CancelOutcome::Declined);
        }

        let (appointment, released) = store.cancel(id, &reason)?;

        info!(%id, reason = %reason, slot = %released.id(), "appointment cancelled, slot released");

        Ok(CancelOutcome::Cancelled {
            appointment,
            released,
        })
    }
}
