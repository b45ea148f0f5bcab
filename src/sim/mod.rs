pub mod bonds;
pub mod budget_cycle;
pub mod construction;
pub mod deficit;
pub mod economy;
pub mod funding;
pub mod maintenance;
pub mod ordinance;
pub mod tracking;
pub mod tribute;
pub mod tribute_rate;

pub use budget_cycle::{
    BUDGET_CYCLE_TICKS, BudgetCycleInput, BudgetCycleResult, PhaseCosts, is_budget_cycle_tick,
    process_budget_cycle,
};
pub use construction::ConstructionCostResult;
pub use deficit::{DeficitCheckResult, DeficitSeverity};
pub use economy::{
    CreditProvider, EconomyQueryable, EconomySystem, PermissiveCreditProvider, PlayerEconomy,
};
pub use tracking::Trend;
