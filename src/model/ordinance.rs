use serde::{Deserialize, Serialize};

/// City policies a player can switch on for a fixed per-phase upkeep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum OrdinanceType {
    EnhancedPatrol,
    IndustrialScrubbers,
    FreeTransit,
    EnergyConservation,
    NightCurfew,
    BeautificationDrive,
}

indexed_enum!(OrdinanceType {
    EnhancedPatrol => "enhanced_patrol",
    IndustrialScrubbers => "industrial_scrubbers",
    FreeTransit => "free_transit",
    EnergyConservation => "energy_conservation",
    NightCurfew => "night_curfew",
    BeautificationDrive => "beautification_drive",
});

/// Immutable terms of an ordinance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrdinanceConfig {
    pub name: &'static str,
    pub cost_per_phase: i64,
    /// Multiplier applied by the consuming system (crime, pollution,
    /// ridership, energy draw, ...).
    pub effect_multiplier: f32,
}

/// Indexed by `OrdinanceType::index()`.
pub const ORDINANCE_CONFIGS: [OrdinanceConfig; OrdinanceType::COUNT] = [
    OrdinanceConfig {
        name: "Enhanced Patrol",
        cost_per_phase: 500,
        effect_multiplier: 0.85,
    },
    OrdinanceConfig {
        name: "Industrial Scrubbers",
        cost_per_phase: 750,
        effect_multiplier: 0.80,
    },
    OrdinanceConfig {
        name: "Free Transit",
        cost_per_phase: 1_000,
        effect_multiplier: 1.25,
    },
    OrdinanceConfig {
        name: "Energy Conservation",
        cost_per_phase: 300,
        effect_multiplier: 0.90,
    },
    OrdinanceConfig {
        name: "Night Curfew",
        cost_per_phase: 200,
        effect_multiplier: 0.90,
    },
    OrdinanceConfig {
        name: "Beautification Drive",
        cost_per_phase: 400,
        effect_multiplier: 1.10,
    },
];

impl OrdinanceType {
    pub fn config(self) -> &'static OrdinanceConfig {
        &ORDINANCE_CONFIGS[self.index()]
    }
}

/// Which ordinances a player currently has enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinanceState {
    enabled: [bool; OrdinanceType::COUNT],
}

impl OrdinanceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable an ordinance. Returns whether the state changed.
    pub fn enable(&mut self, ordinance: OrdinanceType) -> bool {
        let slot = &mut self.enabled[ordinance.index()];
        let changed = !*slot;
        *slot = true;
        changed
    }

    /// Disable an ordinance. Returns whether the state changed.
    pub fn disable(&mut self, ordinance: OrdinanceType) -> bool {
        let slot = &mut self.enabled[ordinance.index()];
        let changed = *slot;
        *slot = false;
        changed
    }

    /// Flip an ordinance and return its new state.
    pub fn toggle(&mut self, ordinance: OrdinanceType) -> bool {
        let slot = &mut self.enabled[ordinance.index()];
        *slot = !*slot;
        *slot
    }

    pub fn is_enabled(&self, ordinance: OrdinanceType) -> bool {
        self.enabled[ordinance.index()]
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.iter().filter(|on| **on).count()
    }

    pub fn iter_enabled(&self) -> impl Iterator<Item = OrdinanceType> + '_ {
        OrdinanceType::ALL
            .iter()
            .copied()
            .filter(|o| self.is_enabled(*o))
    }

    /// Per-phase upkeep of every enabled ordinance.
    pub fn get_total_cost(&self) -> i64 {
        self.iter_enabled().map(|o| o.config().cost_per_phase).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_costs_nothing() {
        let state = OrdinanceState::new();
        assert_eq!(state.get_total_cost(), 0);
        assert_eq!(state.enabled_count(), 0);
    }

    #[test]
    fn total_cost_sums_enabled() {
        let mut state = OrdinanceState::new();
        state.enable(OrdinanceType::EnhancedPatrol);
        state.enable(OrdinanceType::FreeTransit);
        assert_eq!(state.get_total_cost(), 1_500);
    }

    #[test]
    fn enable_is_idempotent() {
        let mut state = OrdinanceState::new();
        assert!(state.enable(OrdinanceType::IndustrialScrubbers));
        let cost = state.get_total_cost();
        assert!(!state.enable(OrdinanceType::IndustrialScrubbers));
        assert_eq!(state.get_total_cost(), cost);
        assert_eq!(state.enabled_count(), 1);
    }

    #[test]
    fn disable_when_disabled_is_noop() {
        let mut state = OrdinanceState::new();
        assert!(!state.disable(OrdinanceType::NightCurfew));
        assert_eq!(state, OrdinanceState::new());
    }

    #[test]
    fn toggle_flips() {
        let mut state = OrdinanceState::new();
        assert!(state.toggle(OrdinanceType::EnergyConservation));
        assert!(state.is_enabled(OrdinanceType::EnergyConservation));
        assert!(!state.toggle(OrdinanceType::EnergyConservation));
        assert!(!state.is_enabled(OrdinanceType::EnergyConservation));
    }
}
