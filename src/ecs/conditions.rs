use bevy_ecs::system::Res;

use super::clock::SimClock;
use super::resources::EconomyConfig;
use crate::sim::is_budget_cycle_tick;

// Bevy run condition functions (for use with `.run_if()`).

/// True on ticks where the budget cycle settles.
pub fn budget_cycle(clock: Res<SimClock>, config: Res<EconomyConfig>) -> bool {
    is_budget_cycle_tick(clock.tick_count, config.cycle_ticks)
}
