//! AppointmentStatus enum for tracking the lifecycle of an appointment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of an appointment in a patient's active list.
///
/// Slots in the availability pool carry no status; an open slot is implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    /// Returns true if the patient can still act on the appointment
    /// (confirm or cancel it).
    pub fn is_actionable(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Pending | AppointmentStatus::Confirmed
        )
    }
}

impl StateMachine for AppointmentStatus {
    /// Valid transitions:
    /// - Pending -> Confirmed
    /// - Pending -> Cancelled
    /// - Confirmed -> Cancelled
    ///
    /// Cancelled is terminal: the record stays in the active list but its
    /// slot has already been released to the pool.
    fn can_transition_to(&self, target: &AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, target),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AppointmentStatus::*;
        match self {
            Pending => vec![Confirmed, Cancelled],
            Confirmed => vec![Cancelled],
            Cancelled => vec![],
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}
