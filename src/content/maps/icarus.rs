//! Icarus - Floating islands; entry requires the ability to fly

use crate::application::dto::{MapSpec, MonsterSpec, RequirementSpec, SafezoneTarget, SpawnSpec};
use crate::content::catalog::combat;
use crate::domain::value_objects::{stats, Direction};

pub const ICARUS: MapSpec = MapSpec {
    exp_multiplier: 1.5,
    safezone: SafezoneTarget::Map(2),
    requirements: &[RequirementSpec::new(stats::CAN_FLY, 1)],
    new_monsters: &[
        MonsterSpec::monster(69, "Alquamos", combat!(75, 11500, 410, 440, 190, 520, 190)),
        MonsterSpec::monster(70, "Queen Rainier", combat!(82, 16000, 500, 550, 220, 580, 220)),
        MonsterSpec::monster(73, "Drakan", combat!(86, 19000, 580, 620, 245, 630, 245)),
    ],
    spawns: &[
        SpawnSpec::area(69, 25, 10, 120, 10, 120),
        SpawnSpec::area(70, 15, 120, 240, 10, 120),
        SpawnSpec::area(73, 10, 10, 240, 130, 240),
        SpawnSpec::point(70, 128, 128, Direction::South),
    ],
    ..MapSpec::empty(10, "Icarus")
};
