use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use bevy_ecs::world::World;
use serde::{Deserialize, Serialize};

use crate::ecs::resources::{EconomyConfig, EconomyState, EventLog, LoggedEvent};
use crate::model::{ExpenseBreakdown, IncomeBreakdown, PlayerId};
use crate::sim::EconomySystem;

pub const EVENTS_FILE: &str = "economy_events.jsonl";
pub const TREASURIES_FILE: &str = "treasuries.jsonl";

/// Point-in-time view of one player's books, as written by the flush.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasurySnapshot {
    pub player: PlayerId,
    pub balance: i64,
    pub last_income: IncomeBreakdown,
    pub last_expense: ExpenseBreakdown,
    pub total_debt: i64,
    pub bond_count: usize,
    pub last_processed_phase: u64,
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write every logged event to `economy_events.jsonl` in `output_dir`,
/// creating the directory if needed.
pub fn flush_events_to_jsonl(log: &EventLog, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    write_jsonl(&output_dir.join(EVENTS_FILE), log.events.iter())
}

/// Write one snapshot per active player to `treasuries.jsonl`.
pub fn flush_treasuries_to_jsonl(system: &EconomySystem, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    write_jsonl(
        &output_dir.join(TREASURIES_FILE),
        system.active_players().filter_map(|player| {
            system.treasury(player).map(|t| TreasurySnapshot {
                player,
                balance: t.balance,
                last_income: t.last_income,
                last_expense: t.last_expense,
                total_debt: t.total_debt(),
                bond_count: t.bond_count(),
                last_processed_phase: t.last_processed_phase,
            })
        }),
    )
}

/// Flush the app's event log and treasuries to the configured output
/// directory, then clear the log. Event ids keep counting afterwards.
pub fn flush_world(world: &mut World) -> io::Result<()> {
    let output_dir = world
        .get_resource::<EconomyConfig>()
        .map(|c| c.output_dir.clone())
        .unwrap_or_else(|| EconomyConfig::default().output_dir);
    let output_dir = Path::new(&output_dir);

    if let Some(state) = world.get_resource::<EconomyState>() {
        flush_treasuries_to_jsonl(&state.0, output_dir)?;
    }
    if let Some(mut log) = world.get_resource_mut::<EventLog>() {
        flush_events_to_jsonl(&log, output_dir)?;
        tracing::debug!(count = log.len(), dir = %output_dir.display(), "flushed economy events");
        log.clear();
    }
    Ok(())
}

/// Read back a file written by `flush_events_to_jsonl`.
pub fn read_events_jsonl(path: &Path) -> io::Result<Vec<LoggedEvent>> {
    let reader = BufReader::new(File::open(path)?);
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(serde_json::from_str(&line)?);
    }
    Ok(events)
}
