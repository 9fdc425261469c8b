//! Tarkan - Desert ruins

use crate::application::dto::{MapSpec, RequirementSpec, SafezoneTarget, SpawnSpec};
use crate::domain::value_objects::stats;

pub const TARKAN: MapSpec = MapSpec {
    exp_multiplier: 1.3,
    safezone: SafezoneTarget::Map(2),
    requirements: &[RequirementSpec::new(stats::LEVEL, 140)],
    spawns: &[
        SpawnSpec::area(57, 20, 10, 90, 10, 80),
        SpawnSpec::area(62, 20, 90, 170, 10, 80),
        SpawnSpec::area(60, 18, 170, 240, 10, 80),
        SpawnSpec::area(58, 15, 10, 120, 90, 170),
        SpawnSpec::area(61, 12, 120, 240, 90, 170),
        SpawnSpec::area(59, 10, 10, 240, 180, 240),
    ],
    ..MapSpec::empty(8, "Tarkan")
};
