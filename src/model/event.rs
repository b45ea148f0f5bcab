use serde::{Deserialize, Serialize};

use super::bond::BondType;
use super::ordinance::OrdinanceType;
use super::treasury::PlayerId;
use super::zone::{ServiceType, ZoneType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingLevelChanged {
    pub service: ServiceType,
    pub old_level: u8,
    pub new_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TributeRateChanged {
    pub zone: ZoneType,
    pub old_rate: u8,
    pub new_rate: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondIssued {
    pub bond_type: BondType,
    pub principal: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondPaidOff {
    pub principal: i64,
    /// Interest paid over the bond's whole life.
    pub total_interest_paid: i64,
    pub was_emergency: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyBondIssued {
    pub principal: i64,
    pub balance_after: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinanceChanged {
    pub ordinance: OrdinanceType,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCycleCompleted {
    pub phase: u64,
    pub total_income: i64,
    pub total_expense: i64,
    pub balance: i64,
}

/// What happened to a player's economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum EconomyEventKind {
    FundingLevelChanged(FundingLevelChanged),
    TributeRateChanged(TributeRateChanged),
    BondIssued(BondIssued),
    BondPaidOff(BondPaidOff),
    DeficitWarning { balance: i64 },
    EmergencyBondOffer { balance: i64 },
    EmergencyBondIssued(EmergencyBondIssued),
    OrdinanceChanged(OrdinanceChanged),
    ConstructionCostDeducted { amount: i64, remaining_balance: i64 },
    BudgetCycleCompleted(BudgetCycleCompleted),
}

/// An economy notification addressed to one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyEvent {
    pub player: PlayerId,
    #[serde(rename = "event")]
    pub kind: EconomyEventKind,
}

impl EconomyEvent {
    pub fn new(player: PlayerId, kind: EconomyEventKind) -> Self {
        Self { player, kind }
    }

    /// Short stable label, used for log lines and flush output.
    pub fn label(&self) -> &'static str {
        match self.kind {
            EconomyEventKind::FundingLevelChanged(_) => "funding_level_changed",
            EconomyEventKind::TributeRateChanged(_) => "tribute_rate_changed",
            EconomyEventKind::BondIssued(_) => "bond_issued",
            EconomyEventKind::BondPaidOff(_) => "bond_paid_off",
            EconomyEventKind::DeficitWarning { .. } => "deficit_warning",
            EconomyEventKind::EmergencyBondOffer { .. } => "emergency_bond_offer",
            EconomyEventKind::EmergencyBondIssued(_) => "emergency_bond_issued",
            EconomyEventKind::OrdinanceChanged(_) => "ordinance_changed",
            EconomyEventKind::ConstructionCostDeducted { .. } => "construction_cost_deducted",
            EconomyEventKind::BudgetCycleCompleted(_) => "budget_cycle_completed",
        }
    }
}
