//! Atlans - Sunken city

use crate::application::dto::{MapSpec, SpawnSpec};
use crate::domain::value_objects::Direction;

pub const ATLANS: MapSpec = MapSpec {
    spawns: &[
        SpawnSpec::point(248, 22, 18, Direction::South),
        SpawnSpec::point(240, 20, 25, Direction::SouthEast),
        SpawnSpec::area(45, 25, 20, 100, 40, 100),
        SpawnSpec::area(46, 20, 100, 180, 20, 80),
        SpawnSpec::area(47, 20, 180, 240, 20, 100),
        SpawnSpec::area(50, 15, 20, 100, 110, 180),
        SpawnSpec::area(51, 12, 100, 180, 110, 180),
        SpawnSpec::area(52, 10, 180, 240, 110, 180),
        SpawnSpec::area(48, 8, 20, 120, 190, 240),
        SpawnSpec::point(49, 80, 220, Direction::North),
        SpawnSpec::point(49, 160, 220, Direction::North),
    ],
    ..MapSpec::empty(7, "Atlans")
};
