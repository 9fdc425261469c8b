//! Lorencia - Starting town and the fields around it

use crate::application::dto::{MapSpec, SpawnSpec};
use crate::domain::value_objects::Direction;

pub const LORENCIA: MapSpec = MapSpec {
    spawns: &[
        // Town
        SpawnSpec::point(253, 127, 86, Direction::South),
        SpawnSpec::point(250, 183, 137, Direction::South),
        SpawnSpec::point(251, 116, 141, Direction::SouthEast),
        SpawnSpec::point(254, 118, 113, Direction::South),
        SpawnSpec::point(255, 127, 101, Direction::West),
        SpawnSpec::point(240, 147, 145, Direction::SouthWest),
        SpawnSpec::point(247, 131, 88, Direction::South),
        SpawnSpec::point(247, 173, 125, Direction::West),
        SpawnSpec::point(249, 94, 125, Direction::East),
        // Single guard outside the west gate, declared as a one-cell region
        SpawnSpec::area(240, 1, 58, 58, 140, 140),
        // Fields
        SpawnSpec::area(3, 30, 135, 240, 20, 70),
        SpawnSpec::area(2, 25, 180, 240, 70, 130),
        SpawnSpec::area(0, 20, 10, 60, 170, 230),
        SpawnSpec::area(1, 20, 60, 110, 190, 240),
        SpawnSpec::area(4, 15, 10, 50, 20, 90),
        SpawnSpec::area(6, 10, 190, 240, 180, 240),
        SpawnSpec::area(7, 8, 20, 60, 100, 130),
        SpawnSpec::area(14, 8, 110, 150, 200, 240),
    ],
    ..MapSpec::empty(0, "Lorencia")
};
