#![allow(dead_code)]

use municipal_economy::model::*;
use municipal_economy::sim::tribute::{self, TributeInput};
use municipal_economy::sim::{EconomySystem, PhaseCosts};

/// A small town: a few buildings per zone, typical occupancy and land value.
pub fn town_income(rates: [u8; 3]) -> IncomeBreakdown {
    let buildings = [
        (ZoneType::Habitation, DensityLevel::Low, 40, 50, 120),
        (ZoneType::Habitation, DensityLevel::High, 180, 200, 140),
        (ZoneType::Exchange, DensityLevel::Low, 20, 30, 160),
        (ZoneType::Exchange, DensityLevel::High, 90, 120, 200),
        (ZoneType::Fabrication, DensityLevel::Low, 25, 40, 90),
        (ZoneType::Fabrication, DensityLevel::High, 70, 100, 80),
    ];
    let amounts: Vec<(ZoneType, i64)> = buildings
        .iter()
        .map(|&(zone, density, occupancy, capacity, sector_value)| {
            let result = tribute::calculate_building_tribute(&TributeInput {
                base_value: tribute::get_base_tribute(zone, density),
                density,
                tribute_modifier: 1.0,
                occupancy,
                capacity,
                sector_value,
                tribute_rate: rates[zone.index()],
            });
            (zone, result.tribute_amount)
        })
        .collect();
    tribute::aggregate_into_income(&tribute::aggregate_tribute(&amounts), 0)
}

pub fn active_system(players: &[PlayerId]) -> EconomySystem {
    let mut system = EconomySystem::new();
    for &player in players {
        system.activate_player(player);
    }
    system
}

pub fn costs(infrastructure: i64, service: i64, energy: i64) -> PhaseCosts {
    PhaseCosts {
        infrastructure,
        service,
        energy,
    }
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
