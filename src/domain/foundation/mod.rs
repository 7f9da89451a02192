//! Shared value objects and error plumbing used across the domain.

mod appointment_status;
mod errors;
mod ids;
mod state_machine;

pub use appointment_status::AppointmentStatus;
pub use errors::{DomainError, ErrorCode};
pub use ids::{AppointmentId, SlotId};
pub use state_machine::StateMachine;
