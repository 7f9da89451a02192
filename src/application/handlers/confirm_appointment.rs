//! ConfirmAppointmentHandler - confirms attendance behind a yes/no gate.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::info;

use crate::domain::appointment::{Appointment, AppointmentError, AppointmentStore};
use crate::domain::foundation::AppointmentId;
use crate::ports::AffirmationGate;

/// Question asked before confirming attendance.
pub const CONFIRM_PROMPT: &str = "Do you confirm your attendance at this appointment? \
Remember to check the Patient Guide for the documents you need to bring.";

/// Result of a confirm attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Attendance confirmed; carries the updated record and the reminder
    /// instants the patient was promised.
    Confirmed {
        appointment: Appointment,
        reminders: Vec<NaiveDateTime>,
    },
    /// The user declined the gate; nothing changed.
    Declined,
}

/// Handler for the presenter's confirm click.
pub struct ConfirmAppointmentHandler {
    gate: Arc<dyn AffirmationGate>,
    reminder_offsets: Vec<u32>,
}

impl ConfirmAppointmentHandler {
    pub fn new(gate: Arc<dyn AffirmationGate>, reminder_offsets: Vec<u32>) -> Self {
        Self {
            gate,
            reminder_offsets,
        }
    }

    /// Asks the gate, then confirms the appointment.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is not in the active list
    /// - `InvalidTransition` if the appointment is Cancelled
    pub fn handle(
        &self,
        store: &mut AppointmentStore,
        id: AppointmentId,
    ) -> Result<ConfirmOutcome, AppointmentError> {
        if !self.gate.confirm(CONFIRM_PROMPT) {
            info!(%id, "confirm declined at the gate");
            return Ok(ConfirmOutcome::Declined);
        }

        let appointment = store.confirm(id)?;
        let reminders = appointment.reminder_schedule(&self.reminder_offsets);

        info!(%id, reminders = reminders.len(), "appointment confirmed");

        Ok(ConfirmOutcome::Confirmed {
            appointment,
            reminders,
        })
    }
}
