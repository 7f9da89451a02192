//! AppointmentStore - in-memory owner of the active list and the pool.

use crate::domain::foundation::{AppointmentId, SlotId};

use super::{Appointment, AppointmentError, AvailabilitySlot};

/// In-memory collection of a patient's appointments plus the availability
/// pool. Owns all state transitions.
///
/// # Invariants
///
/// - the active list keeps insertion order; cancelled records stay in it
/// - a cancellation releases exactly one slot into the pool; the terminal
///   Cancelled status makes a second release for the same record impossible
/// - a claimed slot is removed from the pool and never resurfaces
///
/// Mutations are plain synchronous methods: the portal is driven by discrete
/// user events, one at a time, so no locking is needed. Affirmation gates
/// belong to the application handlers; by the time a store method runs, the
/// user has already said yes.
#[derive(Debug, Clone, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    pool: Vec<AvailabilitySlot>,
}

impl AppointmentStore {
    /// Creates an empty store (the pre-login state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated from seed data.
    pub fn with_seed(appointments: Vec<Appointment>, pool: Vec<AvailabilitySlot>) -> Self {
        Self { appointments, pool }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// The active list, in insertion order.
    pub fn list_active(&self) -> &[Appointment] {
        &self.appointments
    }

    /// The availability pool, in insertion order.
    pub fn list_available(&self) -> &[AvailabilitySlot] {
        &self.pool
    }

    /// Looks up an appointment by id.
    pub fn find(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id() == id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Confirms attendance for the appointment with this id.
    ///
    /// Returns a snapshot of the confirmed record. Confirming an
    /// already-Confirmed appointment succeeds without change.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is not in the active list
    /// - `InvalidTransition` if the appointment is Cancelled
    pub fn confirm(&mut self, id: AppointmentId) -> Result<Appointment, AppointmentError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(AppointmentError::NotFound(id))?;

        appointment.confirm()?;
        Ok(appointment.clone())
    }

    /// Cancels the appointment and releases its slot into the pool.
    ///
    /// The record stays in the active list with status Cancelled; freeing
    /// the slot is a distinct event from removing the record. Returns
    /// snapshots of the cancelled record and the released slot.
    ///
    /// # Errors
    ///
    /// - `ReasonRequired` if `reason` is empty (no mutation happens)
    /// - `NotFound` if the id is not in the active list
    /// - `InvalidTransition` if the appointment is already Cancelled
    pub fn cancel(
        &mut self,
        id: AppointmentId,
        reason: &str,
    ) -> Result<(Appointment, AvailabilitySlot), AppointmentError> {
        if reason.is_empty() {
            return Err(AppointmentError::ReasonRequired);
        }

        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(AppointmentError::NotFound(id))?;

        appointment.cancel()?;

        let slot = AvailabilitySlot::released_by(appointment);
        let snapshot = appointment.clone();
        self.pool.push(slot.clone());

        Ok((snapshot, slot))
    }

    /// Removes the slot with this id from the pool and returns it.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if the id is not in the pool
    pub fn claim(&mut self, id: SlotId) -> Result<AvailabilitySlot, AppointmentError> {
        let index = self
            .pool
            .iter()
            .position(|s| s.id() == id)
            .ok_or(AppointmentError::SlotNotFound(id))?;

        Ok(self.pool.remove(index))
    }

    /// Empties the pool and returns the dropped slots.
    ///
    /// Only used by the legacy claim mode that reproduces the original
    /// portal's pool-clearing behaviour.
    pub fn clear_pool(&mut self) -> Vec<AvailabilitySlot> {
        std::mem::take(&mut self.pool)
    }
}
