use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::model::{INITIAL_BALANCE, PlayerId};
use crate::sim::{BUDGET_CYCLE_TICKS, EconomySystem};

/// Economy configuration (cycle cadence, starting funds, output settings).
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Ticks between budget settlements.
    pub cycle_ticks: u64,
    pub initial_balance: i64,
    /// Starting value of each player's automatic emergency bond toggle.
    pub auto_bonds_enabled: bool,
    /// Players activated when the app is built.
    pub active_players: Vec<PlayerId>,
    pub output_dir: String,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            cycle_ticks: BUDGET_CYCLE_TICKS,
            initial_balance: INITIAL_BALANCE,
            auto_bonds_enabled: true,
            active_players: vec![0],
            output_dir: "output".to_string(),
        }
    }
}

impl EconomyConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Build an `EconomySystem` with this config's players already active.
    pub fn build_system(&self) -> EconomySystem {
        let mut system = EconomySystem::with_settings(
            self.cycle_ticks,
            self.initial_balance,
            self.auto_bonds_enabled,
        );
        for &player in &self.active_players {
            system.activate_player(player);
        }
        system
    }
}

/// The economy arena as an ECS resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct EconomyState(pub EconomySystem);
