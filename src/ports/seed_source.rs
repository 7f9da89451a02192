//! Seed data port - the external data source supplying startup records.

use crate::domain::appointment::{Appointment, AvailabilitySlot};

/// Supplies the template appointments bound to a session at login and the
/// initial availability pool.
///
/// The core treats the returned sequences as opaque ordered input; it never
/// hard-codes the records itself.
pub trait SeedSource: Send + Sync {
    /// The patient's template appointments, in display order.
    fn template_appointments(&self) -> Vec<Appointment>;

    /// The initial availability pool, in display order.
    fn initial_slots(&self) -> Vec<AvailabilitySlot>;
}
