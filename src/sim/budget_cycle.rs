//! Periodic settlement of one player's books.
//!
//! Order within a phase:
//! 1. take the income and upkeep figures cached by the integration layer
//! 2. apply bond payments and price enabled ordinances
//! 3. total income and expense
//! 4. `balance += income - expense`
//! 5. store the breakdowns and push them into the rolling histories
//! 6. deficit detection and emergency auto-issuance, both judged on the
//!    settled balance
//! 7. stamp the phase number

use crate::model::{
    BudgetCycleCompleted, EconomyEvent, EconomyEventKind, EmergencyBondIssued, ExpenseBreakdown,
    IncomeBreakdown, PlayerId,
};

use super::bonds::{self, BondPaymentResult};
use super::deficit::{self, DeficitCheckResult};
use super::economy::PlayerEconomy;
use super::tracking;

/// Ticks between settlements (10 s at 20 Hz).
pub const BUDGET_CYCLE_TICKS: u64 = 200;

/// Upkeep figures aggregated by the integration layer before a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseCosts {
    pub infrastructure: i64,
    pub service: i64,
    pub energy: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetCycleInput {
    pub income: IncomeBreakdown,
    pub costs: PhaseCosts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetCycleResult {
    pub player: PlayerId,
    pub phase: u64,
    pub income: IncomeBreakdown,
    pub expense: ExpenseBreakdown,
    pub balance_before: i64,
    /// Balance right after settlement, before any emergency bond.
    pub settled_balance: i64,
    pub bond_payments: BondPaymentResult,
    pub deficit: DeficitCheckResult,
    pub emergency_bond: Option<EmergencyBondIssued>,
}

impl BudgetCycleResult {
    pub fn net(&self) -> i64 {
        self.income.total - self.expense.total
    }

    /// Notifications this settlement produced, in emission order.
    pub fn events(&self) -> Vec<EconomyEvent> {
        let mut events = Vec::new();
        let emit = |events: &mut Vec<EconomyEvent>, kind| {
            events.push(EconomyEvent::new(self.player, kind));
        };

        for paid in &self.bond_payments.paid_off {
            emit(&mut events, EconomyEventKind::BondPaidOff(*paid));
        }
        if self.deficit.should_warn {
            emit(
                &mut events,
                EconomyEventKind::DeficitWarning {
                    balance: self.settled_balance,
                },
            );
        }
        if self.deficit.should_offer_bond {
            emit(
                &mut events,
                EconomyEventKind::EmergencyBondOffer {
                    balance: self.settled_balance,
                },
            );
        }
        if let Some(issued) = self.emergency_bond {
            emit(&mut events, EconomyEventKind::EmergencyBondIssued(issued));
        }
        emit(
            &mut events,
            EconomyEventKind::BudgetCycleCompleted(BudgetCycleCompleted {
                phase: self.phase,
                total_income: self.income.total,
                total_expense: self.expense.total,
                balance: self
                    .emergency_bond
                    .map_or(self.settled_balance, |e| e.balance_after),
            }),
        );
        events
    }
}

/// Whether the budget cycle fires on this tick. Never on tick 0.
pub fn is_budget_cycle_tick(tick: u64, cycle_ticks: u64) -> bool {
    cycle_ticks > 0 && tick > 0 && tick.is_multiple_of(cycle_ticks)
}

pub fn process_budget_cycle(
    player: PlayerId,
    economy: &mut PlayerEconomy,
    phase: u64,
    input: &BudgetCycleInput,
) -> BudgetCycleResult {
    let treasury = &mut economy.treasury;
    let balance_before = treasury.balance;

    let mut income = input.income;
    income.total = income.sum_parts();

    let bond_payments = bonds::process_detailed_bond_payments(treasury);
    let mut expense = ExpenseBreakdown {
        infrastructure_maintenance: input.costs.infrastructure,
        service_maintenance: input.costs.service,
        energy_maintenance: input.costs.energy,
        bond_payments: bond_payments.total_payment,
        ordinance_costs: economy.ordinances.get_total_cost(),
        total: 0,
    };
    expense.total = expense.sum_parts();

    treasury.balance += income.total - expense.total;
    let settled_balance = treasury.balance;

    treasury.last_income = income;
    treasury.last_expense = expense;
    tracking::record_income(&mut economy.income_history, income);
    tracking::record_expense(&mut economy.expense_history, expense);

    let emergency_due = bonds::is_emergency_bond_due(treasury, economy.auto_bonds_enabled);
    let deficit = deficit::check_deficit(treasury);
    let emergency_bond = emergency_due.then(|| bonds::issue_emergency_bond(treasury));

    treasury.last_processed_phase = phase;

    tracing::debug!(
        player,
        phase,
        income = income.total,
        expense = expense.total,
        balance = settled_balance,
        "budget cycle settled"
    );
    for paid in &bond_payments.paid_off {
        tracing::info!(
            player,
            principal = paid.principal,
            interest = paid.total_interest_paid,
            "bond matured"
        );
    }
    if deficit.should_warn {
        tracing::info!(player, balance = settled_balance, "deficit warning");
    }
    if let Some(issued) = emergency_bond {
        tracing::info!(
            player,
            principal = issued.principal,
            balance = issued.balance_after,
            "emergency bond issued"
        );
    }

    BudgetCycleResult {
        player,
        phase,
        income,
        expense,
        balance_before,
        settled_balance,
        bond_payments,
        deficit,
        emergency_bond,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BondType, OrdinanceType};

    fn input(income: i64, infra: i64, service: i64, energy: i64) -> BudgetCycleInput {
        BudgetCycleInput {
            income: IncomeBreakdown::new(income, 0, 0, 0),
            costs: PhaseCosts {
                infrastructure: infra,
                service,
                energy,
            },
        }
    }

    #[test]
    fn cycle_tick_gate() {
        assert!(!is_budget_cycle_tick(0, BUDGET_CYCLE_TICKS));
        assert!(!is_budget_cycle_tick(199, BUDGET_CYCLE_TICKS));
        assert!(is_budget_cycle_tick(200, BUDGET_CYCLE_TICKS));
        assert!(!is_budget_cycle_tick(201, BUDGET_CYCLE_TICKS));
        assert!(is_budget_cycle_tick(400, BUDGET_CYCLE_TICKS));
        assert!(!is_budget_cycle_tick(400, 0));
    }

    #[test]
    fn balance_conserved_across_settlement() {
        let mut economy = PlayerEconomy::new();
        crate::sim::bonds::issue_bond(&mut economy.treasury, BondType::Small, 0);
        economy.ordinances.enable(OrdinanceType::EnhancedPatrol);
        let before = economy.treasury.balance;

        let result = process_budget_cycle(0, &mut economy, 1, &input(3_000, 400, 600, 100));

        assert_eq!(result.income.total, 3_000);
        assert_eq!(result.expense.bond_payments, 436);
        assert_eq!(result.expense.ordinance_costs, 500);
        assert_eq!(result.expense.total, 400 + 600 + 100 + 436 + 500);
        assert_eq!(economy.treasury.balance, before + result.net());
        assert_eq!(result.balance_before, before);
        assert_eq!(result.settled_balance, economy.treasury.balance);
    }

    #[test]
    fn breakdowns_stored_and_recorded() {
        let mut economy = PlayerEconomy::new();
        let result = process_budget_cycle(1, &mut economy, 7, &input(500, 50, 0, 0));
        assert_eq!(economy.treasury.last_income, result.income);
        assert_eq!(economy.treasury.last_expense, result.expense);
        assert_eq!(economy.treasury.last_processed_phase, 7);
        assert_eq!(economy.income_history.latest(), Some(&result.income));
        assert_eq!(economy.expense_history.len(), 1);
    }

    #[test]
    fn income_total_recomputed_from_parts() {
        let mut economy = PlayerEconomy::new();
        let mut cycle_input = input(0, 0, 0, 0);
        cycle_input.income = IncomeBreakdown {
            habitation_tribute: 10,
            exchange_tribute: 20,
            fabrication_tribute: 30,
            other_income: 40,
            total: 0,
        };
        let result = process_budget_cycle(0, &mut economy, 1, &cycle_input);
        assert_eq!(result.income.total, 100);
    }

    #[test]
    fn deep_deficit_warns_offers_and_auto_issues() {
        let mut economy = PlayerEconomy::new();
        economy.treasury.balance = 0;

        let result = process_budget_cycle(2, &mut economy, 1, &input(0, 15_000, 0, 0));

        assert_eq!(result.settled_balance, -15_000);
        assert!(result.deficit.should_warn);
        assert!(result.deficit.should_offer_bond);
        let issued = result.emergency_bond.expect("emergency bond");
        assert_eq!(issued.balance_after, 10_000);
        assert_eq!(economy.treasury.balance, 10_000);
        assert!(economy.treasury.emergency_bond_active);

        let labels: Vec<&str> = result.events().iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec![
                "deficit_warning",
                "emergency_bond_offer",
                "emergency_bond_issued",
                "budget_cycle_completed"
            ]
        );
    }

    #[test]
    fn auto_bonds_disabled_only_offers() {
        let mut economy = PlayerEconomy::new();
        economy.auto_bonds_enabled = false;
        economy.treasury.balance = -12_000;

        let result = process_budget_cycle(0, &mut economy, 1, &input(0, 0, 0, 0));
        assert!(result.deficit.should_offer_bond);
        assert!(result.emergency_bond.is_none());
        assert_eq!(economy.treasury.balance, -12_000);
        assert!(economy.treasury.active_bonds.is_empty());
    }

    #[test]
    fn matured_bond_reported_in_events() {
        let mut economy = PlayerEconomy::new();
        crate::sim::bonds::issue_bond(&mut economy.treasury, BondType::Small, 0);
        economy.treasury.active_bonds[0].phases_remaining = 1;

        let result = process_budget_cycle(3, &mut economy, 12, &input(1_000, 0, 0, 0));
        assert_eq!(result.bond_payments.paid_off.len(), 1);
        assert!(economy.treasury.active_bonds.is_empty());
        let events = result.events();
        assert_eq!(events[0].label(), "bond_paid_off");
        assert!(events.iter().all(|e| e.player == 3));
    }
}
