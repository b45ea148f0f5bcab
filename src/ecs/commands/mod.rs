pub mod applicator;

use bevy_ecs::message::Message;

use crate::model::{BondType, IncomeBreakdown, OrdinanceType, PlayerId, ServiceType, ZoneType};
use crate::sim::PhaseCosts;

pub use applicator::apply_economy_commands;

/// A player or host intent against the economy.
///
/// Written via `MessageWriter<EconomyCommand>`. The applicator in
/// `SimPhase::PostUpdate` applies them in write order, records resulting
/// events in `EventLog`, and emits `EconomyReactiveEvent` messages.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct EconomyCommand {
    pub player: PlayerId,
    pub kind: EconomyCommandKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EconomyCommandKind {
    // -- Roster --
    ActivatePlayer,
    DeactivatePlayer,

    // -- Integration-layer input --
    SetPhaseIncome(IncomeBreakdown),
    SetPhaseCosts(PhaseCosts),
    SetPopulation(u32),

    // -- Player controls --
    SetTributeRate { zone: ZoneType, rate: i32 },
    SetFundingLevel { service: ServiceType, level: i32 },
    IssueBond(BondType),
    EnableOrdinance(OrdinanceType),
    DisableOrdinance(OrdinanceType),
    SetAutoBonds(bool),

    // -- Spending --
    DeductConstructionCost(i64),
    DeductCredits(i64),
}

impl EconomyCommand {
    pub fn new(player: PlayerId, kind: EconomyCommandKind) -> Self {
        Self { player, kind }
    }

    /// Roster commands are valid for inactive players.
    pub fn is_roster(&self) -> bool {
        matches!(
            self.kind,
            EconomyCommandKind::ActivatePlayer | EconomyCommandKind::DeactivatePlayer
        )
    }
}
