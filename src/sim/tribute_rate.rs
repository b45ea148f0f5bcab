//! Per-zone tribute rates and their effect on zone growth demand.

use crate::model::{MAX_TRIBUTE_RATE, MIN_TRIBUTE_RATE, TreasuryState, TributeRateChanged, ZoneType};

const LOW_RATE_BONUS: i32 = 15;

pub fn clamp_tribute_rate(rate: i32) -> u8 {
    rate.clamp(MIN_TRIBUTE_RATE as i32, MAX_TRIBUTE_RATE as i32) as u8
}

pub fn get_tribute_rate(treasury: &TreasuryState, zone: ZoneType) -> u8 {
    treasury.tribute_rates[zone.index()]
}

/// Store a clamped rate and report the previous one.
pub fn set_tribute_rate(
    treasury: &mut TreasuryState,
    zone: ZoneType,
    rate: i32,
) -> TributeRateChanged {
    let new_rate = clamp_tribute_rate(rate);
    let slot = &mut treasury.tribute_rates[zone.index()];
    let old_rate = *slot;
    *slot = new_rate;
    TributeRateChanged {
        zone,
        old_rate,
        new_rate,
    }
}

pub fn get_average_tribute_rate(treasury: &TreasuryState) -> f32 {
    let sum: u32 = treasury.tribute_rates.iter().map(|r| *r as u32).sum();
    sum as f32 / ZoneType::COUNT as f32
}

/// Growth-demand adjustment for a tribute rate.
///
/// | rate  | modifier              |
/// |-------|-----------------------|
/// | 0–3   | +15                   |
/// | 4–7   | 0                     |
/// | 8–12  | −4 per point over 7   |
/// | 13–16 | −20, −5 per point over 12 |
/// | 17–20 | −40, −5 per point over 16 |
///
/// Rates above 20 are treated as 20.
pub fn calculate_tribute_demand_modifier(rate: u8) -> i32 {
    let rate = rate.min(MAX_TRIBUTE_RATE) as i32;
    match rate {
        0..=3 => LOW_RATE_BONUS,
        4..=7 => 0,
        8..=12 => -4 * (rate - 7),
        13..=16 => -20 - 5 * (rate - 12),
        _ => -40 - 5 * (rate - 16),
    }
}

/// Demand modifier at the treasury's current rate for a zone.
pub fn get_zone_demand_modifier(treasury: &TreasuryState, zone: ZoneType) -> i32 {
    calculate_tribute_demand_modifier(get_tribute_rate(treasury, zone))
}
