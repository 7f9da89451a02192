//! Appointment entity.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AppointmentId, AppointmentStatus, StateMachine};

use super::AppointmentError;

/// An appointment in a patient's active list.
///
/// # Invariants
///
/// - `id` is unique within the active list and immutable once created
/// - status changes only through [`Appointment::confirm`] and
///   [`Appointment::cancel`], which enforce the transition table
/// - a Cancelled appointment stays in the active list; releasing its slot
///   is the store's responsibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier.
    id: AppointmentId,

    /// Calendar date of the visit.
    date: NaiveDate,

    /// Time of day of the visit.
    time: NaiveTime,

    /// Practitioner name.
    provider: String,

    /// Medical specialty.
    specialty: String,

    /// Visit category label (first consultation, control, ...).
    visit_type: String,

    /// Current lifecycle status.
    status: AppointmentStatus,

    /// Consulting room identifier.
    room: String,
}

impl Appointment {
    /// Creates an appointment record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: AppointmentId,
        date: NaiveDate,
        time: NaiveTime,
        provider: impl Into<String>,
        specialty: impl Into<String>,
        visit_type: impl Into<String>,
        status: AppointmentStatus,
        room: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            time,
            provider: provider.into(),
            specialty: specialty.into(),
            visit_type: visit_type.into(),
            status,
            room: room.into(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the appointment ID.
    pub fn id(&self) -> AppointmentId {
        self.id
    }

    /// Returns the visit date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the visit time.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the practitioner name.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the medical specialty.
    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    /// Returns the visit category label.
    pub fn visit_type(&self) -> &str {
        &self.visit_type
    }

    /// Returns the current status.
    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    /// Returns the consulting room.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Returns the scheduled visit instant (date and time combined).
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Confirms attendance.
    ///
    /// Confirming an already-Confirmed appointment is a no-op success, so a
    /// repeated click never corrupts state.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the appointment is Cancelled
    pub fn confirm(&mut self) -> Result<(), AppointmentError> {
        if self.status == AppointmentStatus::Confirmed {
            return Ok(());
        }
        self.transition(AppointmentStatus::Confirmed)
    }

    /// Cancels the appointment.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the appointment is already Cancelled
    pub fn cancel(&mut self) -> Result<(), AppointmentError> {
        self.transition(AppointmentStatus::Cancelled)
    }

    fn transition(&mut self, target: AppointmentStatus) -> Result<(), AppointmentError> {
        if !self.status.can_transition_to(&target) {
            return Err(AppointmentError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────────────────

    /// Whole days between `today` and the visit date. Negative for past
    /// visits, zero for today.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    /// Reminder instants derived from the visit instant: one entry per
    /// offset, each `offset` hours before the visit, in the given order.
    pub fn reminder_schedule(&self, offset_hours: &[u32]) -> Vec<NaiveDateTime> {
        let visit = self.scheduled_at();
        offset_hours
            .iter()
            .map(|hours| visit - Duration::hours(i64::from(*hours)))
            .collect()
    }
}
