//! Feature flags

use serde::Deserialize;

/// Feature flags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureFlags {
    /// Reproduce the legacy portal behaviour where claiming one slot clears
    /// the entire availability pool. Off by default; the default claim mode
    /// removes only the claimed slot.
    #[serde(default)]
    pub legacy_clear_pool_on_claim: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_mode_defaults_to_off() {
        assert!(!FeatureFlags::default().legacy_clear_pool_on_claim);
    }
}
