#[macro_use]
mod macros;

pub mod bond;
pub mod event;
pub mod history;
pub mod ordinance;
pub mod treasury;
pub mod zone;

pub use bond::{BOND_CONFIGS, BondConfig, BondType, CreditAdvance};
pub use event::{
    BondIssued, BondPaidOff, BudgetCycleCompleted, EconomyEvent, EconomyEventKind,
    EmergencyBondIssued, FundingLevelChanged, OrdinanceChanged, TributeRateChanged,
};
pub use history::{ExpenseHistory, HISTORY_CAPACITY, IncomeHistory, PhaseHistory};
pub use ordinance::{ORDINANCE_CONFIGS, OrdinanceConfig, OrdinanceState, OrdinanceType};
pub use treasury::{
    DEFAULT_FUNDING_LEVEL, DEFAULT_TRIBUTE_RATE, ExpenseBreakdown, INITIAL_BALANCE,
    IncomeBreakdown, MAX_FUNDING_LEVEL, MAX_PLAYERS, MAX_TRIBUTE_RATE, MIN_FUNDING_LEVEL,
    MIN_TRIBUTE_RATE, PlayerId, TreasuryState,
};
pub use zone::{DensityLevel, InfrastructureType, ServiceType, ZoneType};
