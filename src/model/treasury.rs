use serde::{Deserialize, Serialize};

use super::bond::CreditAdvance;
use super::zone::{ServiceType, ZoneType};

/// Player slot index into the per-player arena.
pub type PlayerId = u8;

/// Number of player slots the economy tracks.
pub const MAX_PLAYERS: usize = 4;

pub const INITIAL_BALANCE: i64 = 20_000;

pub const DEFAULT_TRIBUTE_RATE: u8 = 7;
pub const MIN_TRIBUTE_RATE: u8 = 0;
pub const MAX_TRIBUTE_RATE: u8 = 20;

pub const DEFAULT_FUNDING_LEVEL: u8 = 100;
pub const MIN_FUNDING_LEVEL: u8 = 0;
pub const MAX_FUNDING_LEVEL: u8 = 150;

/// Income settled in one phase, split by source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    pub habitation_tribute: i64,
    pub exchange_tribute: i64,
    pub fabrication_tribute: i64,
    pub other_income: i64,
    pub total: i64,
}

impl IncomeBreakdown {
    /// Build a breakdown with `total` filled in from the parts.
    pub fn new(habitation: i64, exchange: i64, fabrication: i64, other: i64) -> Self {
        let mut income = Self {
            habitation_tribute: habitation,
            exchange_tribute: exchange,
            fabrication_tribute: fabrication,
            other_income: other,
            total: 0,
        };
        income.total = income.sum_parts();
        income
    }

    pub fn sum_parts(&self) -> i64 {
        self.habitation_tribute
            + self.exchange_tribute
            + self.fabrication_tribute
            + self.other_income
    }

    pub fn tribute_for(&self, zone: ZoneType) -> i64 {
        match zone {
            ZoneType::Habitation => self.habitation_tribute,
            ZoneType::Exchange => self.exchange_tribute,
            ZoneType::Fabrication => self.fabrication_tribute,
        }
    }
}

/// Expenses settled in one phase, split by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub infrastructure_maintenance: i64,
    pub service_maintenance: i64,
    pub energy_maintenance: i64,
    pub bond_payments: i64,
    pub ordinance_costs: i64,
    pub total: i64,
}

impl ExpenseBreakdown {
    pub fn sum_parts(&self) -> i64 {
        self.infrastructure_maintenance
            + self.service_maintenance
            + self.energy_maintenance
            + self.bond_payments
            + self.ordinance_costs
    }
}

/// Financial record for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasuryState {
    pub balance: i64,
    pub last_income: IncomeBreakdown,
    pub last_expense: ExpenseBreakdown,
    /// Indexed by `ZoneType::index()`.
    pub tribute_rates: [u8; ZoneType::COUNT],
    /// Indexed by `ServiceType::index()`.
    pub funding_levels: [u8; ServiceType::COUNT],
    pub last_processed_phase: u64,
    pub deficit_warning_sent: bool,
    pub emergency_bond_active: bool,
    pub active_bonds: Vec<CreditAdvance>,
}

impl TreasuryState {
    pub fn new() -> Self {
        Self::with_balance(INITIAL_BALANCE)
    }

    pub fn with_balance(balance: i64) -> Self {
        Self {
            balance,
            last_income: IncomeBreakdown::default(),
            last_expense: ExpenseBreakdown::default(),
            tribute_rates: [DEFAULT_TRIBUTE_RATE; ZoneType::COUNT],
            funding_levels: [DEFAULT_FUNDING_LEVEL; ServiceType::COUNT],
            last_processed_phase: 0,
            deficit_warning_sent: false,
            emergency_bond_active: false,
            active_bonds: Vec::new(),
        }
    }

    pub fn total_debt(&self) -> i64 {
        self.active_bonds.iter().map(|b| b.remaining_principal).sum()
    }

    pub fn bond_count(&self) -> usize {
        self.active_bonds.len()
    }
}

impl Default for TreasuryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bond::BondType;

    #[test]
    fn new_treasury_has_defaults() {
        let t = TreasuryState::new();
        assert_eq!(t.balance, 20_000);
        assert_eq!(t.tribute_rates, [7, 7, 7]);
        assert_eq!(t.funding_levels, [100, 100, 100, 100]);
        assert_eq!(t.last_processed_phase, 0);
        assert!(!t.deficit_warning_sent);
        assert!(!t.emergency_bond_active);
        assert!(t.active_bonds.is_empty());
    }

    #[test]
    fn income_new_fills_total() {
        let income = IncomeBreakdown::new(100, 200, 300, 50);
        assert_eq!(income.total, 650);
        assert_eq!(income.tribute_for(ZoneType::Exchange), 200);
    }

    #[test]
    fn total_debt_sums_remaining_principal() {
        let mut t = TreasuryState::new();
        let mut a = CreditAdvance::from_config(BondType::Small.config());
        a.remaining_principal = 1_000;
        t.active_bonds.push(a);
        t.active_bonds
            .push(CreditAdvance::from_config(BondType::Standard.config()));
        assert_eq!(t.total_debt(), 26_000);
        assert_eq!(t.bond_count(), 2);
    }

    #[test]
    fn treasury_survives_json() {
        let mut t = TreasuryState::with_balance(-300);
        t.active_bonds
            .push(CreditAdvance::from_config(BondType::Emergency.config()));
        let json = serde_json::to_string(&t).unwrap();
        let back: TreasuryState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
