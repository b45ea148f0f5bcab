//! Bond lifecycle: manual issuance, per-phase repayment, and emergency
//! auto-issuance.
//!
//! Repayment is straight-line on principal with declining-balance interest.
//! Interest always uses a monthly divisor, whatever the settlement cadence:
//! `interest = remaining × bps / (10 000 × 12)`.

use crate::model::{
    BondConfig, BondPaidOff, BondType, CreditAdvance, EmergencyBondIssued, TreasuryState,
};

use super::deficit::EMERGENCY_BOND_THRESHOLD;

pub const MAX_BONDS_PER_PLAYER: usize = 5;
/// Large bonds need a population strictly above this.
pub const LARGE_BOND_POPULATION_THRESHOLD: u32 = 5_000;

const BASIS_POINTS: i64 = 10_000;
const INTEREST_PERIODS_PER_YEAR: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondIssueResult {
    pub success: bool,
    pub bond_type: BondType,
    /// Principal credited; 0 on failure.
    pub principal: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BondPayment {
    pub principal_payment: i64,
    pub interest_payment: i64,
    pub total: i64,
    pub is_final: bool,
}

/// Read-only preview of one phase's payments across all bonds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BondPaymentSummary {
    pub total_principal: i64,
    pub total_interest: i64,
    pub total_payment: i64,
    pub bonds_maturing: u32,
}

/// Payments actually applied in one phase, plus maturity notices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BondPaymentResult {
    pub total_principal: i64,
    pub total_interest: i64,
    pub total_payment: i64,
    pub paid_off: Vec<BondPaidOff>,
}

pub fn get_bond_config(bond_type: BondType) -> &'static BondConfig {
    bond_type.config()
}

/// Manual issuance rules: under the per-player cap, population gate for
/// Large bonds, and never Emergency.
pub fn can_issue_bond(treasury: &TreasuryState, bond_type: BondType, population: u32) -> bool {
    if treasury.active_bonds.len() >= MAX_BONDS_PER_PLAYER {
        return false;
    }
    match bond_type {
        BondType::Emergency => false,
        BondType::Large => population > LARGE_BOND_POPULATION_THRESHOLD,
        BondType::Small | BondType::Standard => true,
    }
}

pub fn issue_bond(
    treasury: &mut TreasuryState,
    bond_type: BondType,
    population: u32,
) -> BondIssueResult {
    if !can_issue_bond(treasury, bond_type, population) {
        return BondIssueResult {
            success: false,
            bond_type,
            principal: 0,
        };
    }

    let bond = CreditAdvance::from_config(get_bond_config(bond_type));
    let principal = bond.principal;
    treasury.balance += principal;
    treasury.active_bonds.push(bond);

    BondIssueResult {
        success: true,
        bond_type,
        principal,
    }
}

fn interest_on(remaining: i64, interest_rate_bps: u32) -> i64 {
    remaining * interest_rate_bps as i64 / (BASIS_POINTS * INTEREST_PERIODS_PER_YEAR)
}

fn scheduled_principal(bond: &CreditAdvance) -> i64 {
    if bond.term_length == 0 {
        return 0;
    }
    bond.principal / bond.term_length as i64
}

/// This phase's payment on one bond. Principal never exceeds what is still
/// outstanding.
pub fn calculate_bond_payment(bond: &CreditAdvance) -> BondPayment {
    let principal_payment = scheduled_principal(bond).min(bond.remaining_principal.max(0));
    let interest_payment = interest_on(bond.remaining_principal.max(0), bond.interest_rate_bps);
    BondPayment {
        principal_payment,
        interest_payment,
        total: principal_payment + interest_payment,
        is_final: bond.is_final_phase(),
    }
}

/// Interest paid over a bond's full term, replaying the per-phase formula
/// from issuance.
pub fn calculate_total_interest(bond: &CreditAdvance) -> i64 {
    let per_phase = scheduled_principal(bond);
    let mut remaining = bond.principal;
    let mut total = 0;
    for _ in 0..bond.term_length {
        total += interest_on(remaining, bond.interest_rate_bps);
        remaining -= per_phase.min(remaining);
    }
    total
}

pub fn process_bond_payments(treasury: &TreasuryState) -> BondPaymentSummary {
    let mut summary = BondPaymentSummary::default();
    for bond in &treasury.active_bonds {
        let payment = calculate_bond_payment(bond);
        summary.total_principal += payment.principal_payment;
        summary.total_interest += payment.interest_payment;
        summary.total_payment += payment.total;
        if payment.is_final {
            summary.bonds_maturing += 1;
        }
    }
    summary
}

/// Apply one phase of payments: reduce every bond, drop the matured ones,
/// and report each maturity once. The balance is not touched here; the
/// budget cycle books `total_payment` as an expense.
pub fn process_detailed_bond_payments(treasury: &mut TreasuryState) -> BondPaymentResult {
    let mut result = BondPaymentResult::default();

    for bond in &mut treasury.active_bonds {
        let payment = calculate_bond_payment(bond);
        result.total_principal += payment.principal_payment;
        result.total_interest += payment.interest_payment;
        result.total_payment += payment.total;

        bond.remaining_principal -= payment.principal_payment;
        bond.phases_remaining = bond.phases_remaining.saturating_sub(1);

        if bond.phases_remaining == 0 {
            result.paid_off.push(BondPaidOff {
                principal: bond.principal,
                total_interest_paid: calculate_total_interest(bond),
                was_emergency: bond.is_emergency,
            });
        }
    }

    treasury.active_bonds.retain(|b| b.phases_remaining > 0);
    result
}

pub fn get_total_debt(treasury: &TreasuryState) -> i64 {
    treasury.total_debt()
}

/// What next phase's bond payments will cost.
pub fn get_total_bond_payment_per_phase(treasury: &TreasuryState) -> i64 {
    process_bond_payments(treasury).total_payment
}

pub fn has_active_emergency_bond(treasury: &TreasuryState) -> bool {
    treasury.active_bonds.iter().any(|b| b.is_emergency)
}

/// Whether the auto-issue conditions hold right now.
pub fn is_emergency_bond_due(treasury: &TreasuryState, auto_bonds_enabled: bool) -> bool {
    auto_bonds_enabled
        && treasury.balance < EMERGENCY_BOND_THRESHOLD
        && !treasury.emergency_bond_active
}

/// Open the Emergency preset unconditionally. Skips the per-player bond cap.
pub fn issue_emergency_bond(treasury: &mut TreasuryState) -> EmergencyBondIssued {
    let bond = CreditAdvance::from_config(get_bond_config(BondType::Emergency));
    let principal = bond.principal;
    treasury.balance += principal;
    treasury.active_bonds.push(bond);
    treasury.emergency_bond_active = true;
    EmergencyBondIssued {
        principal,
        balance_after: treasury.balance,
    }
}

pub fn check_and_issue_emergency_bond(
    treasury: &mut TreasuryState,
    auto_bonds_enabled: bool,
) -> Option<EmergencyBondIssued> {
    if !is_emergency_bond_due(treasury, auto_bonds_enabled) {
        return None;
    }
    Some(issue_emergency_bond(treasury))
}
