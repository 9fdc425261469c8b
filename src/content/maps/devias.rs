//! Devias - Snowfield town

use crate::application::dto::{MapSpec, SpawnSpec};
use crate::domain::value_objects::Direction;

pub const DEVIAS: MapSpec = MapSpec {
    spawns: &[
        SpawnSpec::point(243, 183, 46, Direction::South),
        SpawnSpec::point(246, 217, 12, Direction::South),
        SpawnSpec::point(233, 198, 47, Direction::SouthWest),
        SpawnSpec::point(240, 215, 45, Direction::West),
        SpawnSpec::point(247, 194, 17, Direction::South),
        SpawnSpec::point(247, 207, 17, Direction::South),
        SpawnSpec::area(24, 20, 10, 90, 10, 60),
        SpawnSpec::area(22, 20, 90, 170, 60, 110),
        SpawnSpec::area(23, 18, 10, 80, 110, 170),
        SpawnSpec::area(21, 15, 80, 160, 170, 230),
        SpawnSpec::area(19, 15, 160, 240, 110, 170),
        SpawnSpec::area(20, 10, 160, 240, 180, 240),
        SpawnSpec::point(25, 138, 239, Direction::South),
    ],
    ..MapSpec::empty(2, "Devias")
};
