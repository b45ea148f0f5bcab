use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::SimClock;
use super::commands::{EconomyCommand, apply_economy_commands};
use super::events::EconomyReactiveEvent;
use super::plugin::EconomyPlugin;
use super::resources::{EconomyConfig, EconomyState, EventLog};
use super::schedule::{SimPhase, configure_sim_schedule};

/// Build a headless Bevy app with the simulation clock, economy resources,
/// message types, the command applicator, and the economy systems.
///
/// Manual tick control:
/// ```no_run
/// # use municipal_economy::ecs::{build_economy_app, EconomyConfig, SimTick};
/// let mut app = build_economy_app(EconomyConfig::default());
/// for _ in 0..2_000 {  // ten budget cycles
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_economy_app(config: EconomyConfig) -> App {
    build_economy_app_with_executor(config, ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_economy_app_with_executor(config: EconomyConfig, executor: ExecutorKind) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(SimClock::new());
    app.insert_resource(EventLog::new());
    app.insert_resource(EconomyState(config.build_system()));
    app.insert_resource(config);

    // Register message types
    MessageRegistry::register_message::<EconomyCommand>(app.world_mut());
    MessageRegistry::register_message::<EconomyReactiveEvent>(app.world_mut());

    // Build schedule with message rotation + applicator
    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(apply_economy_commands.in_set(SimPhase::PostUpdate));
    app.add_schedule(schedule);

    app.add_plugins(EconomyPlugin);
    app
}
