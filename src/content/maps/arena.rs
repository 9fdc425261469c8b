//! Arena - Player duel grounds without monsters

use crate::application::dto::{MapSpec, SafezoneTarget, SpawnSpec};
use crate::domain::value_objects::Direction;

pub const ARENA: MapSpec = MapSpec {
    safezone: SafezoneTarget::Map(0),
    spawns: &[
        SpawnSpec::point(229, 60, 135, Direction::South),
        SpawnSpec::point(247, 50, 140, Direction::East),
        SpawnSpec::point(247, 70, 140, Direction::West),
    ],
    ..MapSpec::empty(6, "Arena")
};
