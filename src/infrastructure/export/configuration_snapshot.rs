//! JSON snapshot of a seeded configuration
//!
//! The snapshot resolves identities to the numbers and names content authors
//! use (map numbers, monster numbers, stat designations), so it can be read
//! and diffed without the database.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::GameConfiguration;
use crate::domain::entities::{MapDefinition, MonsterDefinition, SpawnArea};

/// Snapshot of the whole configuration graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationSnapshot {
    pub exported_at: DateTime<Utc>,
    pub attributes: Vec<String>,
    pub monsters: Vec<MonsterData>,
    pub maps: Vec<MapData>,
}

/// Monster data keyed by monster number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterData {
    pub number: u16,
    pub designation: String,
    pub kind: String,
    /// Pairs of stat designation and value
    pub attributes: Vec<(String, f32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapData {
    pub id: String,
    pub number: u8,
    pub name: String,
    pub exp_multiplier: f32,
    /// Number of the safezone map, if resolved
    pub safezone_map: Option<u8>,
    /// Pairs of stat designation and minimum value
    pub requirements: Vec<(String, i32)>,
    pub spawns: Vec<SpawnData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnData {
    pub monster: u16,
    pub quantity: u16,
    pub trigger: String,
    /// Inclusive bounds as [x_min, x_max, y_min, y_max]
    pub region: [u8; 4],
    pub direction: Option<String>,
    pub spawn_delay_ms: Option<u64>,
}

/// Builder for creating a ConfigurationSnapshot with additional options
pub struct ConfigurationSnapshotBuilder<'a> {
    configuration: &'a GameConfiguration,
    include_disabled_spawns: bool,
}

impl<'a> ConfigurationSnapshotBuilder<'a> {
    pub fn new(configuration: &'a GameConfiguration) -> Self {
        Self {
            configuration,
            include_disabled_spawns: true,
        }
    }

    /// Leave out spawns with a quantity of zero
    pub fn without_disabled_spawns(mut self) -> Self {
        self.include_disabled_spawns = false;
        self
    }

    pub fn build(self) -> ConfigurationSnapshot {
        let configuration = self.configuration;

        let monsters = configuration
            .monsters()
            .iter()
            .map(|m| monster_data(configuration, m))
            .collect();

        let maps = configuration
            .maps()
            .iter()
            .map(|m| map_data(configuration, m, self.include_disabled_spawns))
            .collect();

        ConfigurationSnapshot {
            exported_at: Utc::now(),
            attributes: configuration
                .attributes()
                .iter()
                .map(|a| a.designation.clone())
                .collect(),
            monsters,
            maps,
        }
    }
}

impl ConfigurationSnapshot {
    /// Write the snapshot as pretty-printed JSON
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).context("Failed to create export directory")?;
            }
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize snapshot")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        Ok(())
    }
}

fn monster_data(configuration: &GameConfiguration, monster: &MonsterDefinition) -> MonsterData {
    MonsterData {
        number: monster.number,
        designation: monster.designation.clone(),
        kind: monster.kind.as_str().to_string(),
        attributes: monster
            .attributes
            .iter()
            .map(|a| {
                let stat = configuration
                    .find_attribute(&a.attribute_definition)
                    .map(|d| d.designation.clone())
                    .unwrap_or_else(|| a.attribute_definition.to_string());
                (stat, a.value)
            })
            .collect(),
    }
}

fn map_data(
    configuration: &GameConfiguration,
    map: &MapDefinition,
    include_disabled_spawns: bool,
) -> MapData {
    MapData {
        id: map.id.to_string(),
        number: map.number,
        name: map.name.clone(),
        exp_multiplier: map.exp_multiplier,
        safezone_map: map
            .safezone_map
            .and_then(|id| configuration.find_map(&id))
            .map(|m| m.number),
        requirements: map
            .requirements
            .iter()
            .map(|r| (r.stat.clone(), r.minimum_value))
            .collect(),
        spawns: map
            .spawn_areas
            .iter()
            .filter(|s| include_disabled_spawns || !s.is_disabled())
            .map(spawn_data)
            .collect(),
    }
}

fn spawn_data(spawn: &SpawnArea) -> SpawnData {
    SpawnData {
        monster: spawn.monster.number,
        quantity: spawn.quantity,
        trigger: spawn.trigger.as_str().to_string(),
        region: [
            spawn.region.x_min,
            spawn.region.x_max,
            spawn.region.y_min,
            spawn.region.y_max,
        ],
        direction: spawn.direction.map(|d| d.as_str().to_string()),
        spawn_delay_ms: spawn
            .spawn_delay
            .and_then(|d| u64::try_from(d.as_millis()).ok()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MonsterKind;
    use crate::domain::value_objects::{
        Direction, MapDefinitionId, MonsterDefinitionId, MonsterReference, SpawnAreaId,
        SpawnRegion, SpawnTrigger,
    };

    fn configuration() -> GameConfiguration {
        let mut configuration = GameConfiguration::new();
        let gate = MonsterDefinition::new(MonsterDefinitionId::new(), 131, "Castle Gate", MonsterKind::Destructible);
        let reference = MonsterReference::new(gate.id, gate.number);
        let devias = MapDefinition::new(MapDefinitionId::new(), 2, "Devias");
        let mut castle = MapDefinition::new(MapDefinitionId::new(), 11, "Blood Castle 1")
            .with_spawn_area(SpawnArea::at_point(SpawnAreaId::new(), reference, 13, 15, Direction::South))
            .with_spawn_area(SpawnArea::in_region(
                SpawnAreaId::new(),
                reference,
                0,
                SpawnTrigger::ManuallyInvoked,
                SpawnRegion::new(10, 20, 30, 40).unwrap(),
            ));
        castle.safezone_map = Some(devias.id);

        configuration.add_monster(gate).unwrap();
        configuration.add_map(devias).unwrap();
        configuration.add_map(castle).unwrap();
        configuration
    }

    #[test]
    fn test_snapshot_resolves_numbers() {
        let configuration = configuration();

        let snapshot = ConfigurationSnapshotBuilder::new(&configuration).build();

        let castle = &snapshot.maps[1];
        assert_eq!(castle.safezone_map, Some(2));
        assert_eq!(castle.spawns.len(), 2);
        assert_eq!(castle.spawns[0].region, [13, 13, 15, 15]);
        assert_eq!(castle.spawns[0].direction.as_deref(), Some("south"));
        assert_eq!(castle.spawns[1].quantity, 0);
        assert_eq!(snapshot.monsters[0].kind, "destructible");
    }

    #[test]
    fn test_disabled_spawns_can_be_left_out() {
        let configuration = configuration();

        let snapshot = ConfigurationSnapshotBuilder::new(&configuration)
            .without_disabled_spawns()
            .build();

        assert_eq!(snapshot.maps[1].spawns.len(), 1);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = ConfigurationSnapshotBuilder::new(&configuration()).build();

        let json = serde_json::to_string_pretty(&snapshot).expect("serialization should succeed");
        assert!(json.contains("Blood Castle 1"));
        assert!(json.contains("manually_invoked"));

        let deserialized: ConfigurationSnapshot =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(deserialized.maps.len(), 2);
    }
}
