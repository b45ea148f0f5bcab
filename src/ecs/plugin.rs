use bevy_app::{App, Plugin};

use super::systems::add_economy_systems;

/// Installs the economy settlement and reaction systems on `SimTick`.
///
/// `build_economy_app` adds this already; use it directly when composing the
/// economy into a host app built around `configure_sim_schedule`.
pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        add_economy_systems(app);
    }
}
