//! Per-building tribute (tax) revenue.
//!
//! `amount = trunc(base × occupancy × value × rate × modifier)` where
//! occupancy is the filled fraction of capacity, value maps sector value
//! 0–255 onto 0.5–2.0, and rate is the zone's tribute rate as a fraction.

use crate::model::{DensityLevel, IncomeBreakdown, ZoneType};

const SECTOR_VALUE_MAX: f64 = 255.0;
const VALUE_FACTOR_FLOOR: f64 = 0.5;
const VALUE_FACTOR_SPAN: f64 = 1.5;
const RATE_DIVISOR: f64 = 100.0;

/// Base tribute by zone and density, indexed `[zone][density]`.
const BASE_TRIBUTE: [[i64; DensityLevel::COUNT]; ZoneType::COUNT] = [
    // Habitation
    [50, 200],
    // Exchange
    [100, 300],
    // Fabrication
    [75, 250],
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TributeInput {
    pub base_value: i64,
    pub density: DensityLevel,
    pub tribute_modifier: f64,
    pub occupancy: u32,
    pub capacity: u32,
    pub sector_value: u8,
    pub tribute_rate: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TributeResult {
    pub tribute_amount: i64,
    pub occupancy_factor: f64,
    pub value_factor: f64,
    pub rate_factor: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateTributeResult {
    pub habitation_total: i64,
    pub exchange_total: i64,
    pub fabrication_total: i64,
    pub grand_total: i64,
    pub buildings_counted: u32,
}

impl AggregateTributeResult {
    pub fn total_for(&self, zone: ZoneType) -> i64 {
        match zone {
            ZoneType::Habitation => self.habitation_total,
            ZoneType::Exchange => self.exchange_total,
            ZoneType::Fabrication => self.fabrication_total,
        }
    }
}

pub fn get_base_tribute(zone: ZoneType, density: DensityLevel) -> i64 {
    BASE_TRIBUTE[zone.index()][density.index()]
}

pub fn calculate_building_tribute(input: &TributeInput) -> TributeResult {
    let occupancy_factor = if input.capacity == 0 {
        0.0
    } else {
        input.occupancy as f64 / input.capacity as f64
    };
    let value_factor =
        VALUE_FACTOR_FLOOR + (input.sector_value as f64 / SECTOR_VALUE_MAX) * VALUE_FACTOR_SPAN;
    let rate_factor = input.tribute_rate as f64 / RATE_DIVISOR;

    let raw = input.base_value as f64
        * occupancy_factor
        * value_factor
        * rate_factor
        * input.tribute_modifier;

    TributeResult {
        tribute_amount: raw.trunc() as i64,
        occupancy_factor,
        value_factor,
        rate_factor,
    }
}

/// Sum per-building amounts into zone totals.
pub fn aggregate_tribute(amounts: &[(ZoneType, i64)]) -> AggregateTributeResult {
    let mut result = AggregateTributeResult::default();
    for &(zone, amount) in amounts {
        match zone {
            ZoneType::Habitation => result.habitation_total += amount,
            ZoneType::Exchange => result.exchange_total += amount,
            ZoneType::Fabrication => result.fabrication_total += amount,
        }
        result.grand_total += amount;
        result.buildings_counted += 1;
    }
    result
}

/// Turn a tribute aggregate plus any non-tribute revenue into the breakdown
/// the budget cycle consumes.
pub fn aggregate_into_income(
    tribute: &AggregateTributeResult,
    other_income: i64,
) -> IncomeBreakdown {
    IncomeBreakdown::new(
        tribute.habitation_total,
        tribute.exchange_total,
        tribute.fabrication_total,
        other_income,
    )
}
