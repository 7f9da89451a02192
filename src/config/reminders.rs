//! Reminder schedule configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Reminder schedule configuration.
///
/// Offsets are hours before the visit instant at which a reminder is due.
/// Delivery itself (email/SMS) is an external effect; the core only derives
/// the schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderConfig {
    /// Hours before the visit, in announcement order
    #[serde(default = "default_offset_hours")]
    pub offset_hours: Vec<u32>,
}

impl ReminderConfig {
    /// Validate reminder configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.offset_hours.is_empty() {
            return Err(ValidationError::EmptyReminderOffsets);
        }
        if self.offset_hours.contains(&0) {
            return Err(ValidationError::ZeroReminderOffset);
        }
        Ok(())
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            offset_hours: default_offset_hours(),
        }
    }
}

fn default_offset_hours() -> Vec<u32> {
    vec![72, 24, 2]
}
