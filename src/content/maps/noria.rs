//! Noria - Forest town of the elves

use crate::application::dto::{MapSpec, SpawnSpec};
use crate::domain::value_objects::Direction;

pub const NORIA: MapSpec = MapSpec {
    spawns: &[
        SpawnSpec::point(242, 173, 125, Direction::South),
        SpawnSpec::point(238, 171, 105, Direction::SouthWest),
        SpawnSpec::point(245, 180, 98, Direction::South),
        SpawnSpec::point(244, 195, 124, Direction::West),
        SpawnSpec::point(240, 188, 134, Direction::South),
        SpawnSpec::area(26, 30, 110, 170, 150, 230),
        SpawnSpec::area(27, 25, 200, 240, 150, 230),
        SpawnSpec::area(28, 20, 10, 80, 150, 230),
        SpawnSpec::area(29, 15, 10, 90, 70, 140),
        SpawnSpec::area(30, 15, 10, 90, 5, 60),
        SpawnSpec::area(31, 10, 100, 170, 5, 60),
        SpawnSpec::area(32, 8, 190, 240, 5, 60),
    ],
    ..MapSpec::empty(3, "Noria")
};
