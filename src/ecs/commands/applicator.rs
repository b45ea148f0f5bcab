use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::events::EconomyReactiveEvent;
use crate::ecs::resources::{EconomyState, EventLog};
use crate::model::{EconomyEvent, EconomyEventKind};
use crate::sim::{CreditProvider, EconomySystem};

use super::{EconomyCommand, EconomyCommandKind};

/// Exclusive system that drains all pending `EconomyCommand` messages,
/// applies them to the economy, records the resulting events, and emits
/// `EconomyReactiveEvent` messages.
///
/// Runs in `SimPhase::PostUpdate`.
pub fn apply_economy_commands(world: &mut World) {
    let commands: Vec<EconomyCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<EconomyCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let tick = world.get_resource::<SimClock>().map_or(0, |c| c.tick_count);
    let Some(mut state) = world.remove_resource::<EconomyState>() else {
        tracing::warn!(count = commands.len(), "EconomyState missing; dropping economy commands");
        return;
    };
    let mut log = world.remove_resource::<EventLog>().unwrap_or_default();

    let mut reactive_events = Vec::new();
    for cmd in &commands {
        if !cmd.is_roster() && !state.0.is_player_active(cmd.player) {
            tracing::warn!(
                player = cmd.player,
                kind = ?cmd.kind,
                "economy command for inactive player ignored"
            );
            continue;
        }
        if let Some(kind) = apply_command(&mut state.0, cmd) {
            let event = EconomyEvent::new(cmd.player, kind);
            let event_id = log.record(tick, event);
            reactive_events.push(EconomyReactiveEvent { event_id, event });
        }
    }

    if let Some(mut messages) = world.get_resource_mut::<Messages<EconomyReactiveEvent>>() {
        messages.write_batch(reactive_events);
    }

    world.insert_resource(state);
    world.insert_resource(log);
}

/// Apply one command. Returns the event to record, if the command produced one.
fn apply_command(system: &mut EconomySystem, cmd: &EconomyCommand) -> Option<EconomyEventKind> {
    let player = cmd.player;
    match cmd.kind {
        EconomyCommandKind::ActivatePlayer => {
            system.activate_player(player);
            None
        }
        EconomyCommandKind::DeactivatePlayer => {
            system.deactivate_player(player);
            None
        }
        EconomyCommandKind::SetPhaseIncome(income) => {
            system.set_phase_income(player, income);
            None
        }
        EconomyCommandKind::SetPhaseCosts(costs) => {
            system.set_phase_costs(player, costs.infrastructure, costs.service, costs.energy);
            None
        }
        EconomyCommandKind::SetPopulation(population) => {
            system.set_population(player, population);
            None
        }
        EconomyCommandKind::SetTributeRate { zone, rate } => system
            .set_tribute_rate(player, zone, rate)
            .map(EconomyEventKind::TributeRateChanged),
        EconomyCommandKind::SetFundingLevel { service, level } => system
            .set_funding_level(player, service, level)
            .map(EconomyEventKind::FundingLevelChanged),
        EconomyCommandKind::IssueBond(bond_type) => system
            .issue_bond(player, bond_type)
            .map(EconomyEventKind::BondIssued),
        EconomyCommandKind::EnableOrdinance(ordinance) => system
            .enable_ordinance(player, ordinance)
            .map(EconomyEventKind::OrdinanceChanged),
        EconomyCommandKind::DisableOrdinance(ordinance) => system
            .disable_ordinance(player, ordinance)
            .map(EconomyEventKind::OrdinanceChanged),
        EconomyCommandKind::SetAutoBonds(enabled) => {
            system.set_auto_bonds_enabled(player, enabled);
            None
        }
        EconomyCommandKind::DeductConstructionCost(cost) => {
            let result = system.deduct_construction_cost(player, cost);
            if !result.success {
                tracing::debug!(
                    player,
                    cost,
                    balance = result.remaining_balance,
                    "construction refused"
                );
                return None;
            }
            Some(EconomyEventKind::ConstructionCostDeducted {
                amount: result.amount_deducted,
                remaining_balance: result.remaining_balance,
            })
        }
        EconomyCommandKind::DeductCredits(amount) => {
            system.deduct_credits(player, amount);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::message::Messages;
    use bevy_ecs::world::World;

    use crate::ecs::app::build_economy_app;
    use crate::ecs::commands::{EconomyCommand, EconomyCommandKind};
    use crate::ecs::events::EconomyReactiveEvent;
    use crate::ecs::resources::{EconomyConfig, EconomyState, EventLog};
    use crate::ecs::schedule::SimTick;
    use crate::model::{BondType, EconomyEventKind, OrdinanceType, ServiceType, ZoneType};
    use crate::sim::EconomyQueryable;

    fn write_command(world: &mut World, player: u8, kind: EconomyCommandKind) {
        world
            .resource_mut::<Messages<EconomyCommand>>()
            .write(EconomyCommand::new(player, kind));
    }

    fn tick(app: &mut bevy_app::App) {
        app.world_mut().run_schedule(SimTick);
    }

    fn economy(app: &bevy_app::App) -> &crate::sim::EconomySystem {
        &app.world().resource::<EconomyState>().0
    }

    #[test]
    fn tribute_rate_change_is_logged() {
        let mut app = build_economy_app(EconomyConfig::default());
        write_command(
            app.world_mut(),
            0,
            EconomyCommandKind::SetTributeRate {
                zone: ZoneType::Exchange,
                rate: 25,
            },
        );
        tick(&mut app);

        assert_eq!(economy(&app).get_tribute_rate(ZoneType::Exchange, 0), 20);
        let log = app.world().resource::<EventLog>();
        assert_eq!(log.len(), 1);
        assert_eq!(log.events[0].id, 1);
        assert_eq!(log.events[0].tick, 0);
        match log.events[0].event.kind {
            EconomyEventKind::TributeRateChanged(change) => {
                assert_eq!(change.old_rate, 7);
                assert_eq!(change.new_rate, 20);
            }
            other => panic!("unexpected event {other:?}"),
        }

        let reactive = app.world().resource::<Messages<EconomyReactiveEvent>>();
        assert!(!reactive.is_empty());
    }

    #[test]
    fn commands_apply_in_write_order() {
        let mut app = build_economy_app(EconomyConfig::default());
        let world = app.world_mut();
        write_command(
            world,
            0,
            EconomyCommandKind::SetFundingLevel {
                service: ServiceType::Medical,
                level: 40,
            },
        );
        write_command(
            world,
            0,
            EconomyCommandKind::SetFundingLevel {
                service: ServiceType::Medical,
                level: 120,
            },
        );
        tick(&mut app);

        assert_eq!(economy(&app).get_funding_level(ServiceType::Medical, 0), 120);
        let log = app.world().resource::<EventLog>();
        assert_eq!(log.len(), 2);
        assert_eq!(log.events[1].id, 2);
    }

    #[test]
    fn inactive_player_commands_are_ignored() {
        let mut app = build_economy_app(EconomyConfig::default());
        write_command(app.world_mut(), 3, EconomyCommandKind::IssueBond(BondType::Small));
        tick(&mut app);

        assert_eq!(economy(&app).get_bond_count(3), 0);
        assert!(app.world().resource::<EventLog>().is_empty());
    }

    #[test]
    fn activation_then_bond_in_one_tick() {
        let mut app = build_economy_app(EconomyConfig::default());
        let world = app.world_mut();
        write_command(world, 2, EconomyCommandKind::ActivatePlayer);
        write_command(world, 2, EconomyCommandKind::IssueBond(BondType::Standard));
        tick(&mut app);

        let system = economy(&app);
        assert!(system.is_player_active(2));
        assert_eq!(system.get_treasury_balance(2), 45_000);
        assert_eq!(system.get_total_debt(2), 25_000);
    }

    #[test]
    fn refused_actions_record_nothing() {
        let mut app = build_economy_app(EconomyConfig::default());
        let world = app.world_mut();
        write_command(world, 0, EconomyCommandKind::IssueBond(BondType::Large));
        write_command(world, 0, EconomyCommandKind::DeductConstructionCost(50_000));
        write_command(world, 0, EconomyCommandKind::DisableOrdinance(OrdinanceType::NightCurfew));
        tick(&mut app);

        assert!(app.world().resource::<EventLog>().is_empty());
        assert_eq!(economy(&app).get_treasury_balance(0), 20_000);
    }

    #[test]
    fn construction_and_credit_spending() {
        let mut app = build_economy_app(EconomyConfig::default());
        let world = app.world_mut();
        write_command(world, 0, EconomyCommandKind::DeductConstructionCost(5_000));
        write_command(world, 0, EconomyCommandKind::DeductCredits(30_000));
        tick(&mut app);

        assert_eq!(economy(&app).get_treasury_balance(0), -15_000);
        let log = app.world().resource::<EventLog>();
        assert_eq!(log.len(), 1);
        assert_eq!(log.events[0].event.label(), "construction_cost_deducted");
    }

    #[test]
    fn deactivation_stops_control() {
        let mut app = build_economy_app(EconomyConfig::default());
        write_command(app.world_mut(), 0, EconomyCommandKind::DeactivatePlayer);
        tick(&mut app);
        write_command(
            app.world_mut(),
            0,
            EconomyCommandKind::EnableOrdinance(OrdinanceType::FreeTransit),
        );
        tick(&mut app);

        assert!(!economy(&app).is_player_active(0));
        assert!(app.world().resource::<EventLog>().is_empty());
    }

    #[test]
    fn messages_cleared_between_ticks() {
        let mut app = build_economy_app(EconomyConfig::default());
        write_command(
            app.world_mut(),
            0,
            EconomyCommandKind::EnableOrdinance(OrdinanceType::EnhancedPatrol),
        );
        tick(&mut app);
        assert!(
            !app.world()
                .resource::<Messages<EconomyReactiveEvent>>()
                .is_empty()
        );

        tick(&mut app);
        tick(&mut app);

        let reactive = app.world().resource::<Messages<EconomyReactiveEvent>>();
        assert!(reactive.is_empty(), "stale reactive events should be cleared");
    }
}
