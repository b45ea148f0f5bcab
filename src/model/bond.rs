use serde::{Deserialize, Serialize};

/// Bond presets a treasury can draw on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BondType {
    Small,
    Standard,
    Large,
    Emergency,
}

indexed_enum!(BondType {
    Small => "small",
    Standard => "standard",
    Large => "large",
    Emergency => "emergency",
});

/// Immutable terms of a bond preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondConfig {
    pub principal: i64,
    /// Annual rate in basis points (hundredths of a percent).
    pub interest_rate_bps: u32,
    /// Number of budget phases until maturity.
    pub term_length: u32,
    pub is_emergency: bool,
}

/// Preset table, indexed by `BondType::index()`.
pub const BOND_CONFIGS: [BondConfig; BondType::COUNT] = [
    // Small
    BondConfig {
        principal: 5_000,
        interest_rate_bps: 500,
        term_length: 12,
        is_emergency: false,
    },
    // Standard
    BondConfig {
        principal: 25_000,
        interest_rate_bps: 750,
        term_length: 24,
        is_emergency: false,
    },
    // Large
    BondConfig {
        principal: 100_000,
        interest_rate_bps: 1_000,
        term_length: 48,
        is_emergency: false,
    },
    // Emergency
    BondConfig {
        principal: 25_000,
        interest_rate_bps: 1_500,
        term_length: 12,
        is_emergency: true,
    },
];

impl BondType {
    pub fn config(self) -> &'static BondConfig {
        &BOND_CONFIGS[self.index()]
    }
}

/// An outstanding loan on a player's books.
///
/// Only bond repayment touches `remaining_principal` and `phases_remaining`;
/// every other field is fixed at issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAdvance {
    pub principal: i64,
    pub remaining_principal: i64,
    pub interest_rate_bps: u32,
    pub term_length: u32,
    pub phases_remaining: u32,
    pub is_emergency: bool,
}

impl CreditAdvance {
    /// Open a fresh advance from preset terms.
    pub fn from_config(config: &BondConfig) -> Self {
        Self {
            principal: config.principal,
            remaining_principal: config.principal,
            interest_rate_bps: config.interest_rate_bps,
            term_length: config.term_length,
            phases_remaining: config.term_length,
            is_emergency: config.is_emergency,
        }
    }

    pub fn is_final_phase(&self) -> bool {
        self.phases_remaining <= 1
    }
}
