mod common;

use bevy_ecs::message::Messages;
use municipal_economy::ecs::test_helpers::{tick_cycles, tick_n};
use municipal_economy::ecs::{
    EconomyCommand, EconomyCommandKind, EconomyConfig, EconomyReactiveEvent, EconomyState,
    EventLog, build_economy_app,
};
use municipal_economy::flush::{EVENTS_FILE, TREASURIES_FILE, flush_world, read_events_jsonl};
use municipal_economy::model::*;
use municipal_economy::sim::EconomyQueryable;

use common::{costs, read_lines, town_income};

fn send(app: &mut bevy_app::App, player: PlayerId, kind: EconomyCommandKind) {
    app.world_mut()
        .resource_mut::<Messages<EconomyCommand>>()
        .write(EconomyCommand::new(player, kind));
}

fn feed_phase(app: &mut bevy_app::App, player: PlayerId) {
    send(app, player, EconomyCommandKind::SetPhaseIncome(town_income([7, 7, 7])));
    send(app, player, EconomyCommandKind::SetPhaseCosts(costs(500, 600, 200)));
}

#[test]
fn two_players_over_several_cycles() {
    let config = EconomyConfig {
        active_players: vec![0, 1],
        ..EconomyConfig::default()
    };
    let mut app = build_economy_app(config);

    send(
        &mut app,
        1,
        EconomyCommandKind::SetTributeRate {
            zone: ZoneType::Habitation,
            rate: 12,
        },
    );
    send(&mut app, 1, EconomyCommandKind::EnableOrdinance(OrdinanceType::BeautificationDrive));
    for _ in 0..3 {
        feed_phase(&mut app, 0);
        feed_phase(&mut app, 1);
        tick_cycles(&mut app, 1);
    }

    let system = &app.world().resource::<EconomyState>().0;
    assert_eq!(system.treasury(0).unwrap().last_processed_phase, 3);
    assert_eq!(system.get_tribute_rate(ZoneType::Habitation, 1), 12);
    assert_eq!(system.get_last_expense(1), 1_300 + 400);
    assert_eq!(system.player(1).unwrap().income_history.len(), 3);

    let log = app.world().resource::<EventLog>();
    let completed = log
        .events
        .iter()
        .filter(|e| e.event.label() == "budget_cycle_completed")
        .count();
    assert_eq!(completed, 6);
    let ids: Vec<u64> = log.events.iter().map(|e| e.id).collect();
    assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn reactive_events_carry_log_ids() {
    let mut app = build_economy_app(EconomyConfig::default());
    send(&mut app, 0, EconomyCommandKind::IssueBond(BondType::Small));
    tick_n(&mut app, 1);

    let log_id = app.world().resource::<EventLog>().events[0].id;
    let messages = app.world().resource::<Messages<EconomyReactiveEvent>>();
    let mut cursor = messages.get_cursor();
    let reactive: Vec<&EconomyReactiveEvent> = cursor.read(messages).collect();
    assert_eq!(reactive.len(), 1);
    assert_eq!(reactive[0].event_id, log_id);
    assert_eq!(reactive[0].player(), 0);
}

#[test]
fn flush_world_writes_and_clears() {
    let dir = tempfile::tempdir().unwrap();
    let config = EconomyConfig {
        output_dir: dir.path().to_string_lossy().into_owned(),
        active_players: vec![0, 2],
        ..EconomyConfig::default()
    };
    let mut app = build_economy_app(config);
    send(&mut app, 2, EconomyCommandKind::IssueBond(BondType::Standard));
    tick_cycles(&mut app, 1);

    flush_world(app.world_mut()).unwrap();

    let events = read_events_jsonl(&dir.path().join(EVENTS_FILE)).unwrap();
    // bond issued, then one completion per player
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].event.label(), "bond_issued");
    assert_eq!(read_lines(&dir.path().join(TREASURIES_FILE)).len(), 2);
    assert!(app.world().resource::<EventLog>().is_empty());

    tick_cycles(&mut app, 1);
    let log = app.world().resource::<EventLog>();
    assert_eq!(log.events[0].id, 4);
}

#[test]
fn config_from_json_drives_app() {
    let config = EconomyConfig::from_json_str(
        r#"{
            "cycle_ticks": 20,
            "initial_balance": 1000,
            "auto_bonds_enabled": false,
            "active_players": [3]
        }"#,
    )
    .unwrap();
    let mut app = build_economy_app(config);
    send(&mut app, 3, EconomyCommandKind::SetPhaseCosts(costs(12_000, 0, 0)));
    tick_n(&mut app, 21);

    let system = &app.world().resource::<EconomyState>().0;
    assert_eq!(system.get_treasury_balance(3), -11_000);
    assert_eq!(system.get_bond_count(3), 0);

    let labels: Vec<&str> = app
        .world()
        .resource::<EventLog>()
        .events
        .iter()
        .map(|e| e.event.label())
        .collect();
    assert_eq!(
        labels,
        vec!["deficit_warning", "emergency_bond_offer", "budget_cycle_completed"]
    );
}
