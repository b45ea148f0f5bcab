use bevy_ecs::message::Message;

use crate::model::{EconomyEvent, PlayerId};

/// Economy notifications broadcast for downstream systems (demand, zoning,
/// services, UI).
///
/// `event_id` links back to the `EventLog` entry that recorded it.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EconomyReactiveEvent {
    pub event_id: u64,
    pub event: EconomyEvent,
}

impl EconomyReactiveEvent {
    pub fn player(&self) -> PlayerId {
        self.event.player
    }
}
