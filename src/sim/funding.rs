//! Per-service funding levels and the effectiveness curve they drive.

use crate::model::{
    FundingLevelChanged, MAX_FUNDING_LEVEL, MIN_FUNDING_LEVEL, ServiceType, TreasuryState,
};

/// Control points of the effectiveness curve: (funding %, effectiveness).
/// Diminishing returns below 100%, a capped bonus above.
const EFFECTIVENESS_CURVE: [(u8, f32); 6] = [
    (0, 0.0),
    (25, 0.40),
    (50, 0.65),
    (75, 0.85),
    (100, 1.0),
    (150, 1.10),
];

pub fn clamp_funding_level(level: i32) -> u8 {
    level.clamp(MIN_FUNDING_LEVEL as i32, MAX_FUNDING_LEVEL as i32) as u8
}

pub fn get_funding_level(treasury: &TreasuryState, service: ServiceType) -> u8 {
    treasury.funding_levels[service.index()]
}

/// Store a clamped funding level and report the previous one.
pub fn set_funding_level(
    treasury: &mut TreasuryState,
    service: ServiceType,
    level: i32,
) -> FundingLevelChanged {
    let new_level = clamp_funding_level(level);
    let slot = &mut treasury.funding_levels[service.index()];
    let old_level = *slot;
    *slot = new_level;
    FundingLevelChanged {
        service,
        old_level,
        new_level,
    }
}

/// Piecewise-linear effectiveness for a funding level. Levels past the last
/// control point take its value.
pub fn calculate_effectiveness(level: u8) -> f32 {
    let level = level.min(MAX_FUNDING_LEVEL);
    for pair in EFFECTIVENESS_CURVE.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if level == x1 {
            return y1;
        }
        if level < x1 {
            let t = (level - x0) as f32 / (x1 - x0) as f32;
            return y0 + (y1 - y0) * t;
        }
    }
    EFFECTIVENESS_CURVE[EFFECTIVENESS_CURVE.len() - 1].1
}

/// Effectiveness of a service at the treasury's current funding.
pub fn get_service_effectiveness(treasury: &TreasuryState, service: ServiceType) -> f32 {
    calculate_effectiveness(get_funding_level(treasury, service))
}

/// Scale a service building's base coverage strength by funding effectiveness.
pub fn apply_funding_to_coverage(base_coverage: f32, level: u8) -> f32 {
    base_coverage * calculate_effectiveness(level)
}
