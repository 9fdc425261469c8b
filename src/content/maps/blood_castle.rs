//! Blood Castle 1 - Event map whose spawns are driven by the event lifecycle

use std::time::Duration;

use crate::application::dto::{MapSpec, MonsterSpec, SafezoneTarget, SpawnSpec};
use crate::domain::entities::MonsterKind;
use crate::domain::value_objects::{Direction, SpawnTrigger};

pub const BLOOD_CASTLE_1: MapSpec = MapSpec {
    safezone: SafezoneTarget::Map(2),
    new_monsters: &[
        MonsterSpec::npc(131, "Castle Gate", MonsterKind::Destructible),
        MonsterSpec::npc(132, "Statue of Saint", MonsterKind::Destructible),
    ],
    spawns: &[
        SpawnSpec::point(232, 10, 9, Direction::South),
        SpawnSpec::region(131, 1, None, SpawnTrigger::OnceAtEventStart, 13, 13, 15, 15),
        SpawnSpec::region(132, 1, None, SpawnTrigger::OnceAtWaveStart, 13, 13, 95, 95),
        SpawnSpec::region(
            3,
            20,
            Some(Duration::from_secs(10)),
            SpawnTrigger::AutomaticDuringEvent,
            8,
            20,
            20,
            60,
        ),
        SpawnSpec::region(
            12,
            15,
            Some(Duration::from_secs(15)),
            SpawnTrigger::AutomaticDuringWave,
            8,
            20,
            60,
            90,
        ),
        // Reserved for the event controller; placed only on demand
        SpawnSpec::region(5, 0, None, SpawnTrigger::ManuallyInvoked, 10, 16, 75, 85),
    ],
    ..MapSpec::empty(11, "Blood Castle 1")
};
