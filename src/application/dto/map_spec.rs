//! Map authoring data - Static descriptions of maps, spawns and new monsters
//!
//! Every shipped map is a `const` value of [`MapSpec`]. The types only hold
//! `'static` data so map content can live in constants without allocation.

use std::time::Duration;

use crate::domain::entities::MonsterKind;
use crate::domain::value_objects::{Direction, SpawnTrigger};

/// Everything needed to build one map definition and its subgraph
#[derive(Debug, Clone, Copy)]
pub struct MapSpec {
    pub number: u8,
    pub name: &'static str,
    pub exp_multiplier: f32,
    pub safezone: SafezoneTarget,
    pub requirements: &'static [RequirementSpec],
    /// Monsters introduced by this map; they join the shared catalog before
    /// any spawn of the map is created
    pub new_monsters: &'static [MonsterSpec],
    pub spawns: &'static [SpawnSpec],
}

impl MapSpec {
    /// A map with no requirements, monsters or spawns, which is its own safezone
    pub const fn empty(number: u8, name: &'static str) -> Self {
        Self {
            number,
            name,
            exp_multiplier: 1.0,
            safezone: SafezoneTarget::SameMap,
            requirements: &[],
            new_monsters: &[],
            spawns: &[],
        }
    }
}

/// The map a player is returned to from a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafezoneTarget {
    SameMap,
    Map(u8),
}

impl SafezoneTarget {
    /// The number of the target map, given the number of the declaring map
    pub fn target_number(&self, own_number: u8) -> u8 {
        match self {
            SafezoneTarget::SameMap => own_number,
            SafezoneTarget::Map(number) => *number,
        }
    }
}

/// A minimum stat value required to enter a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementSpec {
    pub stat: &'static str,
    pub minimum_value: i32,
}

impl RequirementSpec {
    pub const fn new(stat: &'static str, minimum_value: i32) -> Self {
        Self {
            stat,
            minimum_value,
        }
    }
}

/// A monster definition declared by map content
#[derive(Debug, Clone, Copy)]
pub struct MonsterSpec {
    pub number: u16,
    pub designation: &'static str,
    pub kind: MonsterKind,
    /// Pairs of stat designation and value
    pub attributes: &'static [(&'static str, f32)],
}

impl MonsterSpec {
    pub const fn monster(
        number: u16,
        designation: &'static str,
        attributes: &'static [(&'static str, f32)],
    ) -> Self {
        Self {
            number,
            designation,
            kind: MonsterKind::Monster,
            attributes,
        }
    }

    pub const fn npc(number: u16, designation: &'static str, kind: MonsterKind) -> Self {
        Self {
            number,
            designation,
            kind,
            attributes: &[],
        }
    }
}

/// One spawn declaration of a map
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnSpec {
    /// A single monster at an exact cell with a fixed facing
    Point {
        monster: u16,
        x: u8,
        y: u8,
        direction: Direction,
    },
    /// Monsters anywhere within an inclusive region
    Region {
        monster: u16,
        quantity: u16,
        delay: Option<Duration>,
        trigger: SpawnTrigger,
        x_min: u8,
        x_max: u8,
        y_min: u8,
        y_max: u8,
    },
}

impl SpawnSpec {
    pub const fn point(monster: u16, x: u8, y: u8, direction: Direction) -> Self {
        SpawnSpec::Point {
            monster,
            x,
            y,
            direction,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub const fn region(
        monster: u16,
        quantity: u16,
        delay: Option<Duration>,
        trigger: SpawnTrigger,
        x_min: u8,
        x_max: u8,
        y_min: u8,
        y_max: u8,
    ) -> Self {
        SpawnSpec::Region {
            monster,
            quantity,
            delay,
            trigger,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Always-on region spawn without delay
    pub const fn area(monster: u16, quantity: u16, x_min: u8, x_max: u8, y_min: u8, y_max: u8) -> Self {
        Self::region(
            monster,
            quantity,
            None,
            SpawnTrigger::Automatic,
            x_min,
            x_max,
            y_min,
            y_max,
        )
    }

    pub fn monster_number(&self) -> u16 {
        match self {
            SpawnSpec::Point { monster, .. } | SpawnSpec::Region { monster, .. } => *monster,
        }
    }
}
