//! ClaimSlotHandler - assigns an open slot to the patient behind a gate.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::appointment::{AppointmentError, AppointmentStore, AvailabilitySlot};
use crate::domain::foundation::SlotId;
use crate::ports::AffirmationGate;

/// Question asked before taking an available slot.
pub const CLAIM_PROMPT: &str = "Do you want to take this available appointment? \
It will be assigned to you immediately if you accept.";

/// Result of a claim attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Slot assigned; confirmation by email and SMS is an external effect.
    Claimed { slot: AvailabilitySlot },
    /// The user declined the gate; the pool is untouched.
    Declined,
}

/// Handler for the presenter's claim click.
///
/// The default mode removes only the claimed slot. The legacy mode also
/// clears the rest of the pool afterwards, reproducing the original
/// portal's behaviour (see `FeatureFlags::legacy_clear_pool_on_claim`).
pub struct ClaimSlotHandler {
    gate: Arc<dyn AffirmationGate>,
    legacy_clear_pool: bool,
}

impl ClaimSlotHandler {
    pub fn new(gate: Arc<dyn AffirmationGate>, legacy_clear_pool: bool) -> Self {
        Self {
            gate,
            legacy_clear_pool,
        }
    }

    /// Asks the gate, then removes the slot from the pool.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if the id is not in the pool
    pub fn handle(
        &self,
        store: &mut AppointmentStore,
        id: SlotId,
    ) -> Result<ClaimOutcome, AppointmentError> {
        if !self.gate.confirm(CLAIM_PROMPT) {
            info!(%id, "claim declined at the gate");
            return Ok(ClaimOutcome::Declined);
        }

        let slot = store.claim(id)?;

        if self.legacy_clear_pool {
            let dropped = store.clear_pool();
            debug!(
                dropped = dropped.len(),
                "legacy mode: cleared remaining pool after claim"
            );
        }

        info!(%id, "slot claimed");

        Ok(ClaimOutcome::Claimed { slot })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gate::ScriptedGate;
    use crate::domain::appointment::AvailabilitySlot;
    use chrono::{NaiveDate, NaiveTime};

    fn slot(id: u32) -> AvailabilitySlot {
        AvailabilitySlot::new(
            SlotId::new(id),
            NaiveDate::from_ymd_opt(2025, 11, 8).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            "Dr. Luis Gómez",
            "Oncología",
            "503-A",
        )
    }

    fn store_with_two_slots() -> AppointmentStore {
        AppointmentStore::with_seed(vec![], vec![slot(101), slot(102)])
    }

    #[test]
    fn affirmed_claim_removes_only_the_claimed_slot() {
        let mut store = store_with_two_slots();
        let handler = ClaimSlotHandler::new(Arc::new(ScriptedGate::affirming()), false);

        let outcome = handler.handle(&mut store, SlotId::new(101)).unwrap();

        let ClaimOutcome::Claimed { slot } = outcome else {
            panic!("expected a claimed outcome");
        };
        assert_eq!(slot.id(), SlotId::new(101));
        assert_eq!(store.list_available().len(), 1);
        assert_eq!(store.list_available()[0].id(), SlotId::new(102));
    }

    #[test]
    fn legacy_mode_clears_the_whole_pool() {
        let mut store = store_with_two_slots();
        let handler = ClaimSlotHandler::new(Arc::new(ScriptedGate::affirming()), true);

        let outcome = handler.handle(&mut store, SlotId::new(101)).unwrap();

        assert!(matches!(outcome, ClaimOutcome::Claimed { .. }));
        assert!(store.list_available().is_empty());
    }

    #[test]
    fn declined_gate_leaves_the_pool_untouched() {
        let mut store = store_with_two_slots();
        let handler = ClaimSlotHandler::new(Arc::new(ScriptedGate::declining()), false);

        let outcome = handler.handle(&mut store, SlotId::new(101)).unwrap();

        assert_eq!(outcome, ClaimOutcome::Declined);
        assert_eq!(store.list_available().len(), 2);
    }

    #[test]
    fn unknown_slot_surfaces_slot_not_found() {
        let mut store = store_with_two_slots();
        let handler = ClaimSlotHandler::new(Arc::new(ScriptedGate::affirming()), false);

        let err = handler.handle(&mut store, SlotId::new(999)).unwrap_err();

        assert_eq!(err, AppointmentError::SlotNotFound(SlotId::new(999)));
        assert_eq!(store.list_available().len(), 2);
    }
}
