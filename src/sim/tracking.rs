//! Rolling revenue and expense history.

use crate::model::{ExpenseBreakdown, ExpenseHistory, IncomeBreakdown, IncomeHistory};

/// Direction of income between the oldest and newest retained phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

pub fn record_income(history: &mut IncomeHistory, income: IncomeBreakdown) {
    history.push(income);
}

pub fn record_expense(history: &mut ExpenseHistory, expense: ExpenseBreakdown) {
    history.push(expense);
}

/// Mean total income over the retained phases (0 when empty).
pub fn average_income(history: &IncomeHistory) -> i64 {
    mean(history.iter().map(|i| i.total), history.len())
}

/// Mean total expense over the retained phases (0 when empty).
pub fn average_expense(history: &ExpenseHistory) -> i64 {
    mean(history.iter().map(|e| e.total), history.len())
}

pub fn income_trend(history: &IncomeHistory) -> Trend {
    match (history.oldest(), history.latest()) {
        (Some(oldest), Some(latest)) if latest.total > oldest.total => Trend::Rising,
        (Some(oldest), Some(latest)) if latest.total < oldest.total => Trend::Falling,
        _ => Trend::Stable,
    }
}

/// Per-phase net (income − expense), oldest first, over phases present in
/// both histories.
pub fn net_history(income: &IncomeHistory, expense: &ExpenseHistory) -> Vec<i64> {
    income
        .iter()
        .zip(expense.iter())
        .map(|(i, e)| i.total - e.total)
        .collect()
}

fn mean(values: impl Iterator<Item = i64>, len: usize) -> i64 {
    if len == 0 {
        return 0;
    }
    values.sum::<i64>() / len as i64
}
