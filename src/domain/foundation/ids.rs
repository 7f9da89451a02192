//! Strongly-typed identifier value objects.
//!
//! The portal's data source assigns plain integer identifiers, so these are
//! newtypes over `u32` rather than UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for an appointment in a patient's active list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(u32);

impl AppointmentId {
    /// Creates an AppointmentId from a raw integer.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppointmentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a slot in the availability pool.
///
/// A slot released by a cancellation carries the cancelled appointment's
/// number, so the two identifier spaces overlap by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(u32);

impl SlotId {
    /// Creates a SlotId from a raw integer.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SlotId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<AppointmentId> for SlotId {
    /// A cancelled appointment releases a slot under its own number.
    fn from(id: AppointmentId) -> Self {
        Self(id.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_id_displays_raw_value() {
        assert_eq!(format!("{}", AppointmentId::new(42)), "42");
    }

    #[test]
    fn appointment_id_parses_from_string() {
        let id: AppointmentId = "7".parse().unwrap();
        assert_eq!(id, AppointmentId::new(7));
    }

    #[test]
    fn appointment_id_rejects_non_numeric() {
        assert!("abc".parse::<AppointmentId>().is_err());
    }

    #[test]
    fn slot_id_from_appointment_id_keeps_the_number() {
        let slot: SlotId = AppointmentId::new(101).into();
        assert_eq!(slot.value(), 101);
    }

    #[test]
    fn ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&AppointmentId::new(1)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&SlotId::new(101)).unwrap(), "101");
    }
}
