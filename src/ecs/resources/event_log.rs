use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::model::{EconomyEvent, PlayerId};

/// An economy event stamped with its log id and the tick it happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    pub id: u64,
    pub tick: u64,
    #[serde(flatten)]
    pub event: EconomyEvent,
}

/// Accumulates economy events between flushes. Ids are sequential from 1
/// and keep counting across `clear`.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<LoggedEvent>,
    next_id: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tick: u64, event: EconomyEvent) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.events.push(LoggedEvent { id, tick, event });
        id
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn for_player(&self, player: PlayerId) -> impl Iterator<Item = &LoggedEvent> + '_ {
        self.events.iter().filter(move |e| e.event.player == player)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EconomyEventKind;

    fn warning(player: PlayerId) -> EconomyEvent {
        EconomyEvent::new(player, EconomyEventKind::DeficitWarning { balance: -6_000 })
    }

    #[test]
    fn ids_are_sequential_and_survive_clear() {
        let mut log = EventLog::new();
        assert_eq!(log.record(10, warning(0)), 1);
        assert_eq!(log.record(10, warning(1)), 2);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.record(20, warning(0)), 3);
        assert_eq!(log.events[0].tick, 20);
    }

    #[test]
    fn filter_by_player() {
        let mut log = EventLog::new();
        log.record(0, warning(0));
        log.record(0, warning(1));
        log.record(0, warning(1));
        assert_eq!(log.for_player(1).count(), 2);
        assert_eq!(log.for_player(3).count(), 0);
    }

    #[test]
    fn logged_event_serializes_flat() {
        let mut log = EventLog::new();
        log.record(400, warning(2));
        let value = serde_json::to_value(log.events[0]).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["tick"], 400);
        assert_eq!(value["player"], 2);
        assert_eq!(value["event"]["kind"], "deficit_warning");
        assert_eq!(value["event"]["data"]["balance"], -6_000);
    }
}
