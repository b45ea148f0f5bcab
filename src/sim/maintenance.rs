//! Infrastructure and service upkeep.
//!
//! Service upkeep scales linearly with funding level; only effectiveness
//! (see `funding`) follows the diminishing-returns curve.

use crate::model::{InfrastructureType, ServiceType};

/// Per-tile upkeep, indexed by `InfrastructureType::index()`.
const INFRASTRUCTURE_RATES: [i64; InfrastructureType::COUNT] = [
    5, // Pathway
    2, // EnergyConduit
    3, // FluidConduit
    8, // RailTrack
];

/// Per-building upkeep at 100% funding, indexed by `ServiceType::index()`.
const SERVICE_BASE_COSTS: [i64; ServiceType::COUNT] = [
    100, // Enforcer
    120, // HazardResponse
    300, // Medical
    200, // Education
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfrastructureMaintenanceInput {
    pub base_cost: i64,
    pub cost_multiplier: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfrastructureMaintenanceResult {
    pub pathway_cost: i64,
    pub energy_conduit_cost: i64,
    pub fluid_conduit_cost: i64,
    pub rail_cost: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMaintenanceInput {
    pub service: ServiceType,
    pub base_cost: i64,
    pub funding_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMaintenanceResult {
    pub actual_cost: i64,
    pub funding_level: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceMaintenanceBreakdown {
    pub enforcer_cost: i64,
    pub hazard_response_cost: i64,
    pub medical_cost: i64,
    pub education_cost: i64,
    pub total: i64,
}

pub fn get_infrastructure_maintenance_rate(kind: InfrastructureType) -> i64 {
    INFRASTRUCTURE_RATES[kind.index()]
}

pub fn get_service_base_cost(service: ServiceType) -> i64 {
    SERVICE_BASE_COSTS[service.index()]
}

pub fn calculate_infrastructure_cost(input: &InfrastructureMaintenanceInput) -> i64 {
    (input.base_cost as f64 * input.cost_multiplier).round() as i64
}

pub fn aggregate_infrastructure_maintenance(
    costs: &[(InfrastructureType, i64)],
) -> InfrastructureMaintenanceResult {
    let mut result = InfrastructureMaintenanceResult::default();
    for &(kind, cost) in costs {
        match kind {
            InfrastructureType::Pathway => result.pathway_cost += cost,
            InfrastructureType::EnergyConduit => result.energy_conduit_cost += cost,
            InfrastructureType::FluidConduit => result.fluid_conduit_cost += cost,
            InfrastructureType::RailTrack => result.rail_cost += cost,
        }
        result.total += cost;
    }
    result
}

pub fn calculate_service_maintenance(input: &ServiceMaintenanceInput) -> ServiceMaintenanceResult {
    let actual_cost = (input.base_cost as f64 * input.funding_level as f64 / 100.0).round() as i64;
    ServiceMaintenanceResult {
        actual_cost,
        funding_level: input.funding_level,
    }
}

pub fn aggregate_service_maintenance(costs: &[(ServiceType, i64)]) -> ServiceMaintenanceBreakdown {
    let mut result = ServiceMaintenanceBreakdown::default();
    for &(service, cost) in costs {
        match service {
            ServiceType::Enforcer => result.enforcer_cost += cost,
            ServiceType::HazardResponse => result.hazard_response_cost += cost,
            ServiceType::Medical => result.medical_cost += cost,
            ServiceType::Education => result.education_cost += cost,
        }
        result.total += cost;
    }
    result
}
