pub mod app;
pub mod clock;
pub mod commands;
pub mod conditions;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod systems;
pub mod test_helpers;

pub use app::{build_economy_app, build_economy_app_with_executor};
pub use clock::SimClock;
pub use commands::{EconomyCommand, EconomyCommandKind, apply_economy_commands};
pub use conditions::budget_cycle;
pub use events::EconomyReactiveEvent;
pub use plugin::EconomyPlugin;
pub use resources::{EconomyConfig, EconomyState, EventLog, LoggedEvent};
pub use schedule::{SimPhase, SimTick, configure_sim_schedule};
