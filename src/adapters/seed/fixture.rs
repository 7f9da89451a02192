//! Fixture seed source carrying externally supplied records.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::appointment::{Appointment, AvailabilitySlot};
use crate::domain::foundation::{AppointmentId, AppointmentStatus, SlotId};
use crate::ports::SeedSource;

/// Seed source backed by in-memory record lists.
///
/// Hosts build one from whatever their data feed returns; tests and demos
/// use [`FixtureSeed::demo`], the canonical portal data set.
#[derive(Debug, Clone)]
pub struct FixtureSeed {
    appointments: Vec<Appointment>,
    slots: Vec<AvailabilitySlot>,
}

impl FixtureSeed {
    /// Wraps externally supplied seed records.
    pub fn new(appointments: Vec<Appointment>, slots: Vec<AvailabilitySlot>) -> Self {
        Self {
            appointments,
            slots,
        }
    }

    /// The canonical demo data set: two template appointments (ids 1 and 2)
    /// and one open slot (id 101).
    ///
    /// # Panics
    ///
    /// Never in practice; the embedded dates and times are valid.
    pub fn demo() -> Self {
        let appointments = vec![
            Appointment::new(
                AppointmentId::new(1),
                NaiveDate::from_ymd_opt(2025, 11, 15).expect("valid date"),
                NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
                "Dr. Carlos Martínez",
                "Oncología",
                "Primera Consulta",
                AppointmentStatus::Pending,
                "501-A",
            ),
            Appointment::new(
                AppointmentId::new(2),
                NaiveDate::from_ymd_opt(2025, 11, 22).expect("valid date"),
                NaiveTime::from_hms_opt(14, 30, 0).expect("valid time"),
                "Dra. Ana Rodríguez",
                "Hematología",
                "Control",
                AppointmentStatus::Confirmed,
                "502-B",
            ),
        ];

        let slots = vec![AvailabilitySlot::new(
            SlotId::new(101),
            NaiveDate::from_ymd_opt(2025, 11, 8).expect("valid date"),
            NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
            "Dr. Luis Gómez",
            "Oncología",
            "503-A",
        )];

        Self::new(appointments, slots)
    }
}

impl SeedSource for FixtureSeed {
    fn template_appointments(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    fn initial_slots(&self) -> Vec<AvailabilitySlot> {
        self.slots.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_seed_has_two_appointments_and_one_slot() {
        let seed = FixtureSeed::demo();
        let appointments = seed.template_appointments();
        let slots = seed.initial_slots();

        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].id(), AppointmentId::new(1));
        assert_eq!(appointments[0].status(), AppointmentStatus::Pending);
        assert_eq!(appointments[1].id(), AppointmentId::new(2));
        assert_eq!(appointments[1].status(), AppointmentStatus::Confirmed);

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].id(), SlotId::new(101));
    }

    #[test]
    fn seed_returns_fresh_copies() {
        let seed = FixtureSeed::demo();
        let first = seed.template_appointments();
        let second = seed.template_appointments();
        assert_eq!(first, second);
    }
}
