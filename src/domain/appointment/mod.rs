//! Appointment lifecycle and slot reallocation.
//!
//! The active list and the availability pool are owned by
//! [`AppointmentStore`]; cancelling an appointment flips its status and
//! releases exactly one slot back into the pool.

mod errors;
mod model;
mod slot;
mod store;

pub use errors::AppointmentError;
pub use model::Appointment;
pub use slot::AvailabilitySlot;
pub use store::AppointmentStore;
