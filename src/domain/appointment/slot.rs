//! Availability slot - a claimable opening in the pool.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SlotId;

use super::Appointment;

/// An open appointment opportunity any patient may claim.
///
/// Same shape as an appointment minus status and visit type. Created from
/// seed data at startup or by a cancellation; destroyed when claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    id: SlotId,
    date: NaiveDate,
    time: NaiveTime,
    provider: String,
    specialty: String,
    room: String,
}

impl AvailabilitySlot {
    /// Creates a slot record.
    pub fn new(
        id: SlotId,
        date: NaiveDate,
        time: NaiveTime,
        provider: impl Into<String>,
        specialty: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            time,
            provider: provider.into(),
            specialty: specialty.into(),
            room: room.into(),
        }
    }

    /// Derives the slot freed by a cancelled appointment: same date, time,
    /// provider, specialty and room, under the appointment's number.
    pub fn released_by(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id().into(),
            date: appointment.date(),
            time: appointment.time(),
            provider: appointment.provider().to_string(),
            specialty: appointment.specialty().to_string(),
            room: appointment.room().to_string(),
        }
    }

    /// Returns the slot ID.
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Returns the slot date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the slot time.
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

    /// Returns the consulting room.
    pub fn room(&self) -> &str {
        &self.room
    }
}
