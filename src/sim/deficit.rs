//! Deficit detection.
//!
//! Both thresholds are edge-triggered: each fires once per excursion below
//! it and re-arms only after the balance returns to zero or above.

use crate::model::TreasuryState;

pub const DEFICIT_WARNING_THRESHOLD: i64 = -5_000;
pub const EMERGENCY_BOND_THRESHOLD: i64 = -10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeficitCheckResult {
    pub should_warn: bool,
    pub should_offer_bond: bool,
    /// Balance fell back to non-negative and the flags were cleared.
    pub recovered: bool,
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeficitSeverity {
    None,
    Negative,
    Warning,
    Critical,
}

pub fn calculate_deficit_severity(balance: i64) -> DeficitSeverity {
    if balance < EMERGENCY_BOND_THRESHOLD {
        DeficitSeverity::Critical
    } else if balance < DEFICIT_WARNING_THRESHOLD {
        DeficitSeverity::Warning
    } else if balance < 0 {
        DeficitSeverity::Negative
    } else {
        DeficitSeverity::None
    }
}

/// Evaluate thresholds against the current balance and update the
/// notification flags.
pub fn check_deficit(treasury: &mut TreasuryState) -> DeficitCheckResult {
    let balance = treasury.balance;
    let mut result = DeficitCheckResult {
        balance,
        ..DeficitCheckResult::default()
    };

    if balance >= 0 {
        result.recovered = treasury.deficit_warning_sent || treasury.emergency_bond_active;
        treasury.deficit_warning_sent = false;
        treasury.emergency_bond_active = false;
        return result;
    }

    if balance < DEFICIT_WARNING_THRESHOLD && !treasury.deficit_warning_sent {
        treasury.deficit_warning_sent = true;
        result.should_warn = true;
    }

    if balance < EMERGENCY_BOND_THRESHOLD && !treasury.emergency_bond_active {
        treasury.emergency_bond_active = true;
        result.should_offer_bond = true;
    }

    result
}
