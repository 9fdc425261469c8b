//! Dungeon - Underground levels below Lorencia

use crate::application::dto::{MapSpec, SafezoneTarget, SpawnSpec};
use crate::domain::value_objects::Direction;

pub const DUNGEON: MapSpec = MapSpec {
    safezone: SafezoneTarget::Map(0),
    spawns: &[
        SpawnSpec::area(12, 20, 5, 60, 5, 60),
        SpawnSpec::area(17, 15, 60, 120, 5, 60),
        SpawnSpec::area(11, 15, 120, 180, 5, 60),
        SpawnSpec::area(15, 12, 180, 240, 5, 60),
        SpawnSpec::area(16, 12, 5, 60, 70, 130),
        SpawnSpec::area(5, 12, 60, 120, 70, 130),
        SpawnSpec::area(13, 10, 120, 180, 70, 130),
        SpawnSpec::area(10, 10, 180, 240, 70, 130),
        SpawnSpec::area(9, 8, 5, 80, 140, 200),
        SpawnSpec::area(8, 8, 80, 160, 140, 200),
        SpawnSpec::point(18, 200, 230, Direction::South),
        SpawnSpec::point(100, 115, 175, Direction::South),
        SpawnSpec::point(100, 119, 175, Direction::South),
        SpawnSpec::point(101, 60, 210, Direction::East),
    ],
    ..MapSpec::empty(1, "Dungeon")
};
