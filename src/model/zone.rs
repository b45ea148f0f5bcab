use serde::{Deserialize, Serialize};

/// Zone types that pay tribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ZoneType {
    Habitation,
    Exchange,
    Fabrication,
}

indexed_enum!(ZoneType {
    Habitation => "habitation",
    Exchange => "exchange",
    Fabrication => "fabrication",
});

/// Building density tier used by the base-tribute lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DensityLevel {
    Low,
    High,
}

indexed_enum!(DensityLevel {
    Low => "low",
    High => "high",
});

/// City services whose funding level the player controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ServiceType {
    Enforcer,
    HazardResponse,
    Medical,
    Education,
}

indexed_enum!(ServiceType {
    Enforcer => "enforcer",
    HazardResponse => "hazard_response",
    Medical => "medical",
    Education => "education",
});

/// Network asset classes with a fixed per-tile upkeep rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum InfrastructureType {
    Pathway,
    EnergyConduit,
    FluidConduit,
    RailTrack,
}

indexed_enum!(InfrastructureType {
    Pathway => "pathway",
    EnergyConduit => "energy_conduit",
    FluidConduit => "fluid_conduit",
    RailTrack => "rail_track",
});
