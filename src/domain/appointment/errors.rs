//! Appointment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AppointmentId, AppointmentStatus, ErrorCode, SlotId};

/// Errors surfaced by appointment operations.
///
/// A declined affirmation gate is not an error; handlers report it through
/// their outcome types instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppointmentError {
    /// No appointment with this id in the active list.
    #[error("Appointment {0} not found")]
    NotFound(AppointmentId),

    /// No slot with this id in the availability pool.
    #[error("Slot {0} not found")]
    SlotNotFound(SlotId),

    /// Cancellation requires a stated reason.
    #[error("A cancellation reason is required")]
    ReasonRequired,

    /// The requested status change is not allowed.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

impl AppointmentError {
    /// Maps the error to its code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppointmentError::NotFound(_) => ErrorCode::AppointmentNotFound,
            AppointmentError::SlotNotFound(_) => ErrorCode::SlotNotFound,
            AppointmentError::ReasonRequired => ErrorCode::ReasonRequired,
            AppointmentError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_one_to_one() {
        assert_eq!(
            AppointmentError::NotFound(AppointmentId::new(9)).code(),
            ErrorCode::AppointmentNotFound
        );
        assert_eq!(
            AppointmentError::SlotNotFound(SlotId::new(9)).code(),
            ErrorCode::SlotNotFound
        );
        assert_eq!(
            AppointmentError::ReasonRequired.code(),
            ErrorCode::ReasonRequired
        );
    }

    #[test]
    fn display_includes_the_missing_id() {
        let err = AppointmentError::NotFound(AppointmentId::new(3));
        assert_eq!(format!("{}", err), "Appointment 3 not found");
    }

    #[test]
    fn invalid_transition_names_both_statuses() {
        let err = AppointmentError::InvalidTransition {
            from: AppointmentStatus::Cancelled,
            to: AppointmentStatus::Confirmed,
        };
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
        assert_eq!(
            format!("{}", err),
            "Invalid status transition from Cancelled to Confirmed"
        );
    }
}
