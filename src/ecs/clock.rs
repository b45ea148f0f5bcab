use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Simulation clock resource counting fixed ticks.
///
/// The `advance_clock` system moves the clock forward at the end of each tick
/// (in `SimPhase::Last`), so systems see the current tick before it advances.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimClock {
    pub tick_count: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at an arbitrary tick, e.g. when resuming a session.
    pub fn starting_at(tick_count: u64) -> Self {
        Self { tick_count }
    }

    pub fn advance(&mut self) {
        self.tick_count += 1;
    }

    /// Budget phase the current tick falls in.
    pub fn phase(&self, cycle_ticks: u64) -> u64 {
        self.tick_count.checked_div(cycle_ticks).unwrap_or(0)
    }
}

/// Bevy system that advances the simulation clock by one tick.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
