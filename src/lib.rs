pub mod ecs;
pub mod flush;
pub mod model;
pub mod sim;

pub use ecs::{EconomyConfig, build_economy_app};
pub use model::{
    BondType, EconomyEvent, EconomyEventKind, IncomeBreakdown, OrdinanceType, PlayerId,
    ServiceType, TreasuryState, ZoneType,
};
pub use sim::{CreditProvider, EconomyQueryable, EconomySystem};
