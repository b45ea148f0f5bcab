use bevy_app::App;

use crate::ecs::clock::SimClock;
use crate::ecs::resources::EconomyConfig;
use crate::ecs::schedule::SimTick;
use crate::sim::is_budget_cycle_tick;

/// Run `n` simulation ticks.
pub fn tick_n(app: &mut App, n: u64) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Run ticks until `n` budget cycles have settled, stopping right after the
/// last settling tick.
pub fn tick_cycles(app: &mut App, n: u32) {
    let cycle_ticks = app.world().resource::<EconomyConfig>().cycle_ticks;
    for _ in 0..n {
        loop {
            let tick = current_tick(app);
            app.world_mut().run_schedule(SimTick);
            if is_budget_cycle_tick(tick, cycle_ticks) {
                break;
            }
        }
    }
}

/// Return the current tick from the clock resource.
pub fn current_tick(app: &App) -> u64 {
    app.world().resource::<SimClock>().tick_count
}
