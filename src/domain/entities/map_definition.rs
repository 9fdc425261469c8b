//! Map definition entity - A game map with its spawn areas and entry requirements

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    AttributeDefinitionId, AttributeRequirementId, Direction, MapDefinitionId, MonsterReference,
    SpawnAreaId, SpawnRegion, SpawnTrigger,
};

/// A map of the game configuration
///
/// The map number is the map's identity within a configuration. The safezone
/// reference is left unset while the map is built and is only assigned once
/// every map has a committed identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDefinition {
    pub id: MapDefinitionId,
    pub number: u8,
    pub name: String,
    /// Multiplier applied to experience gained on this map
    pub exp_multiplier: f32,
    /// Requirements an actor must all satisfy to enter the map
    pub requirements: Vec<AttributeRequirement>,
    /// Spawn areas in declaration order
    pub spawn_areas: Vec<SpawnArea>,
    /// Map a player is returned to from this map, possibly itself
    pub safezone_map: Option<MapDefinitionId>,
}

impl MapDefinition {
    pub fn new(id: MapDefinitionId, number: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            number,
            name: name.into(),
            exp_multiplier: 1.0,
            requirements: Vec::new(),
            spawn_areas: Vec::new(),
            safezone_map: None,
        }
    }

    pub fn with_exp_multiplier(mut self, exp_multiplier: f32) -> Self {
        self.exp_multiplier = exp_multiplier;
        self
    }

    pub fn with_spawn_area(mut self, spawn_area: SpawnArea) -> Self {
        self.spawn_areas.push(spawn_area);
        self
    }

    pub fn requirement_for_mut(
        &mut self,
        attribute: &AttributeDefinitionId,
    ) -> Option<&mut AttributeRequirement> {
        self.requirements.iter_mut().find(|r| &r.attribute == attribute)
    }

    /// Total number of monsters that are spawned automatically
    pub fn automatic_population(&self) -> u32 {
        self.spawn_areas
            .iter()
            .filter(|s| s.trigger == SpawnTrigger::Automatic)
            .map(|s| u32::from(s.quantity))
            .sum()
    }
}

/// A place where one kind of monster spawns on a map
///
/// A quantity of zero is a declared but disabled spawn, kept so an event
/// system can enable it later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnArea {
    pub id: SpawnAreaId,
    pub monster: MonsterReference,
    pub quantity: u16,
    pub trigger: SpawnTrigger,
    pub region: SpawnRegion,
    /// Exact facing; only set when the region is a single cell
    pub direction: Option<Direction>,
    /// Delay before each spawn of this area
    pub spawn_delay: Option<Duration>,
}

impl SpawnArea {
    /// A single monster placed at an exact cell with a fixed facing
    pub fn at_point(
        id: SpawnAreaId,
        monster: MonsterReference,
        x: u8,
        y: u8,
        direction: Direction,
    ) -> Self {
        Self {
            id,
            monster,
            quantity: 1,
            trigger: SpawnTrigger::Automatic,
            region: SpawnRegion::point(x, y),
            direction: Some(direction),
            spawn_delay: None,
        }
    }

    /// Monsters placed anywhere in a region; facing is chosen at spawn time
    pub fn in_region(
        id: SpawnAreaId,
        monster: MonsterReference,
        quantity: u16,
        trigger: SpawnTrigger,
        region: SpawnRegion,
    ) -> Self {
        Self {
            id,
            monster,
            quantity,
            trigger,
            region,
            direction: None,
            spawn_delay: None,
        }
    }

    pub fn with_spawn_delay(mut self, delay: Duration) -> Self {
        self.spawn_delay = Some(delay);
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.quantity == 0
    }
}

/// A minimum value of an attribute required to enter a map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeRequirement {
    pub id: AttributeRequirementId,
    pub attribute: AttributeDefinitionId,
    /// Designation of the attribute, kept for logging and export
    pub stat: String,
    pub minimum_value: i32,
}

impl AttributeRequirement {
    pub fn new(
        id: AttributeRequirementId,
        attribute: AttributeDefinitionId,
        stat: impl Into<String>,
        minimum_value: i32,
    ) -> Self {
        Self {
            id,
            attribute,
            stat: stat.into(),
            minimum_value,
        }
    }
}
