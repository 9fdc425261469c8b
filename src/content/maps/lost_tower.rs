//! Lost Tower - Seven floors of undead, reached from Devias

use crate::application::dto::{MapSpec, SafezoneTarget, SpawnSpec};
use crate::domain::value_objects::Direction;

pub const LOST_TOWER: MapSpec = MapSpec {
    exp_multiplier: 1.2,
    safezone: SafezoneTarget::Map(2),
    spawns: &[
        SpawnSpec::area(36, 20, 5, 80, 5, 80),
        SpawnSpec::area(39, 18, 80, 160, 5, 80),
        SpawnSpec::area(34, 15, 160, 240, 5, 80),
        SpawnSpec::area(41, 15, 5, 80, 90, 170),
        SpawnSpec::area(37, 12, 80, 160, 90, 170),
        SpawnSpec::area(40, 12, 160, 240, 90, 170),
        SpawnSpec::area(35, 8, 5, 120, 180, 240),
        SpawnSpec::point(38, 190, 210, Direction::South),
        SpawnSpec::point(102, 84, 164, Direction::South),
        SpawnSpec::point(102, 88, 164, Direction::South),
        SpawnSpec::point(101, 140, 200, Direction::West),
    ],
    ..MapSpec::empty(4, "Lost Tower")
};
