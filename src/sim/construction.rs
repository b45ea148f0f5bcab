//! One-shot construction charges for player-initiated builds.
//!
//! Unlike the generic credit provider, construction refuses to push the
//! treasury below zero.

use crate::model::TreasuryState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructionCostResult {
    pub success: bool,
    pub amount_deducted: i64,
    pub remaining_balance: i64,
}

pub fn can_afford_construction(treasury: &TreasuryState, cost: i64) -> bool {
    cost >= 0 && treasury.balance >= cost
}

pub fn deduct_construction_cost(treasury: &mut TreasuryState, cost: i64) -> ConstructionCostResult {
    if !can_afford_construction(treasury, cost) {
        if cost < 0 {
            tracing::warn!(cost, "negative construction cost rejected");
        }
        return ConstructionCostResult {
            success: false,
            amount_deducted: 0,
            remaining_balance: treasury.balance,
        };
    }

    treasury.balance -= cost;
    ConstructionCostResult {
        success: true,
        amount_deducted: cost,
        remaining_balance: treasury.balance,
    }
}
