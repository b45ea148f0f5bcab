//! Economy systems.
//!
//! Settlement (Settlement phase, cycle ticks only):
//! 1. `settle_budget_cycle` runs the budget cycle for every active player
//!
//! Reaction system (Reactions phase):
//! 2. `report_fiscal_alerts` logs deficit and emergency notifications

use bevy_app::App;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Res, ResMut};

use crate::ecs::clock::SimClock;
use crate::ecs::conditions::budget_cycle;
use crate::ecs::events::EconomyReactiveEvent;
use crate::ecs::resources::{EconomyState, EventLog};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::model::EconomyEventKind;

pub fn add_economy_systems(app: &mut App) {
    app.add_systems(
        SimTick,
        settle_budget_cycle
            .run_if(budget_cycle)
            .in_set(SimPhase::Settlement),
    );
    app.add_systems(SimTick, report_fiscal_alerts.in_set(SimPhase::Reactions));
}

fn settle_budget_cycle(
    clock: Res<SimClock>,
    mut state: ResMut<EconomyState>,
    mut log: ResMut<EventLog>,
    mut events: MessageWriter<EconomyReactiveEvent>,
) {
    let tick = clock.tick_count;
    for event in state.0.tick(tick) {
        let event_id = log.record(tick, event);
        events.write(EconomyReactiveEvent { event_id, event });
    }
}

fn report_fiscal_alerts(mut events: MessageReader<EconomyReactiveEvent>) {
    for reactive in events.read() {
        let player = reactive.player();
        match reactive.event.kind {
            EconomyEventKind::DeficitWarning { balance } => {
                tracing::warn!(
                    player,
                    balance,
                    event_id = reactive.event_id,
                    "treasury in deficit"
                );
            }
            EconomyEventKind::EmergencyBondOffer { balance } => {
                tracing::warn!(
                    player,
                    balance,
                    event_id = reactive.event_id,
                    "emergency bond offered"
                );
            }
            EconomyEventKind::EmergencyBondIssued(issued) => {
                tracing::warn!(
                    player,
                    principal = issued.principal,
                    balance = issued.balance_after,
                    event_id = reactive.event_id,
                    "emergency bond drawn"
                );
            }
            _ => {}
        }
    }
}
