use crate::model::{OrdinanceChanged, OrdinanceState, OrdinanceType};

/// Enable an ordinance. Yields a change only when it was previously off.
pub fn enable_ordinance(
    state: &mut OrdinanceState,
    ordinance: OrdinanceType,
) -> Option<OrdinanceChanged> {
    state.enable(ordinance).then_some(OrdinanceChanged {
        ordinance,
        enabled: true,
    })
}

/// Disable an ordinance. Yields a change only when it was previously on.
pub fn disable_ordinance(
    state: &mut OrdinanceState,
    ordinance: OrdinanceType,
) -> Option<OrdinanceChanged> {
    state.disable(ordinance).then_some(OrdinanceChanged {
        ordinance,
        enabled: false,
    })
}

/// Multiplier other systems apply for an ordinance; 1.0 while it is off.
pub fn get_effect_multiplier(state: &OrdinanceState, ordinance: OrdinanceType) -> f32 {
    if state.is_enabled(ordinance) {
        ordinance.config().effect_multiplier
    } else {
        1.0
    }
}
