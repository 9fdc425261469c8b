//! Structural validation of a seeded configuration
//!
//! Re-checks the referential invariants of the finished graph before it is
//! committed for the last time. Game balance is not checked.

use std::collections::HashSet;

use crate::domain::aggregates::GameConfiguration;

/// A broken invariant found in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub map: Option<u8>,
    pub message: String,
}

impl ValidationIssue {
    fn on_map(map: u8, message: impl Into<String>) -> Self {
        Self {
            map: Some(map),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.map {
            Some(map) => write!(f, "map {}: {}", map, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Which pass the configuration is expected to have completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    AfterInitialPass,
    AfterSafezonePass,
}

/// Collect every broken invariant; an empty result means the graph is sound
pub fn validate_configuration(
    configuration: &GameConfiguration,
    stage: ValidationStage,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut numbers = HashSet::new();

    for map in configuration.maps() {
        if !numbers.insert(map.number) {
            issues.push(ValidationIssue::on_map(map.number, "map number is used more than once"));
        }

        for (index, spawn) in map.spawn_areas.iter().enumerate() {
            if !spawn.region.is_well_formed() {
                issues.push(ValidationIssue::on_map(
                    map.number,
                    format!("spawn #{} has inverted bounds", index),
                ));
            }
            if spawn.direction.is_some() && !spawn.region.is_point() {
                issues.push(ValidationIssue::on_map(
                    map.number,
                    format!("spawn #{} has a direction but covers more than one cell", index),
                ));
            }
            if configuration.find_monster(&spawn.monster.id).is_none() {
                issues.push(ValidationIssue::on_map(
                    map.number,
                    format!("spawn #{} references unknown monster {}", index, spawn.monster.number),
                ));
            }
        }

        let mut required = HashSet::new();
        for requirement in &map.requirements {
            if !required.insert(requirement.attribute) {
                issues.push(ValidationIssue::on_map(
                    map.number,
                    format!("requirement '{}' is declared more than once", requirement.stat),
                ));
            }
            if configuration.find_attribute(&requirement.attribute).is_none() {
                issues.push(ValidationIssue::on_map(
                    map.number,
                    format!("requirement '{}' references an unknown attribute", requirement.stat),
                ));
            }
        }

        match (map.safezone_map, stage) {
            (Some(target), _) if configuration.find_map(&target).is_none() => {
                issues.push(ValidationIssue::on_map(map.number, "safezone points at an unknown map"));
            }
            (None, ValidationStage::AfterSafezonePass) => {
                issues.push(ValidationIssue::on_map(map.number, "safezone has not been resolved"));
            }
            _ => {}
        }
    }

    for monster in configuration.monsters() {
        for value in &monster.attributes {
            if configuration.find_attribute(&value.attribute_definition).is_none() {
                issues.push(ValidationIssue {
                    map: None,
                    message: format!(
                        "monster {} references an unknown attribute definition",
                        monster.number
                    ),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MapDefinition, MonsterDefinition, MonsterKind, SpawnArea};
    use crate::domain::value_objects::{
        Direction, MapDefinitionId, MonsterDefinitionId, MonsterReference, SpawnAreaId, SpawnRegion,
        SpawnTrigger,
    };

    fn configuration_with_guard() -> (GameConfiguration, MonsterReference) {
        let mut configuration = GameConfiguration::new();
        let guard = MonsterDefinition::new(MonsterDefinitionId::new(), 240, "Safety Guard", MonsterKind::Guard);
        let reference = MonsterReference::new(guard.id, guard.number);
        configuration.add_monster(guard).unwrap();
        (configuration, reference)
    }

    #[test]
    fn test_sound_configuration_has_no_issues() {
        let (mut configuration, guard) = configuration_with_guard();
        let mut map = MapDefinition::new(MapDefinitionId::new(), 0, "Lorencia")
            .with_spawn_area(SpawnArea::at_point(SpawnAreaId::new(), guard, 147, 145, Direction::South));
        map.safezone_map = Some(map.id);
        configuration.add_map(map).unwrap();

        assert!(validate_configuration(&configuration, ValidationStage::AfterSafezonePass).is_empty());
    }

    #[test]
    fn test_unresolved_safezone_only_matters_after_second_pass() {
        let (mut configuration, _) = configuration_with_guard();
        configuration
            .add_map(MapDefinition::new(MapDefinitionId::new(), 0, "Lorencia"))
            .unwrap();

        assert!(validate_configuration(&configuration, ValidationStage::AfterInitialPass).is_empty());
        let issues = validate_configuration(&configuration, ValidationStage::AfterSafezonePass);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "map 0: safezone has not been resolved");
    }

    #[test]
    fn test_broken_spawns_are_reported() {
        let (mut configuration, guard) = configuration_with_guard();
        let mut facing_region = SpawnArea::in_region(
            SpawnAreaId::new(),
            guard,
            1,
            SpawnTrigger::Automatic,
            SpawnRegion::new(10, 20, 10, 20).unwrap(),
        );
        facing_region.direction = Some(Direction::North);
        let mut inverted = facing_region.clone();
        inverted.direction = None;
        inverted.region = SpawnRegion {
            x_min: 30,
            x_max: 20,
            y_min: 0,
            y_max: 0,
        };
        let unknown = SpawnArea::at_point(
            SpawnAreaId::new(),
            MonsterReference::new(MonsterDefinitionId::new(), 7),
            1,
            1,
            Direction::West,
        );
        configuration
            .add_map(
                MapDefinition::new(MapDefinitionId::new(), 0, "Lorencia")
                    .with_spawn_area(facing_region)
                    .with_spawn_area(inverted)
                    .with_spawn_area(unknown),
            )
            .unwrap();

        let issues = validate_configuration(&configuration, ValidationStage::AfterInitialPass);

        assert_eq!(issues.len(), 3);
        assert!(issues[0].message.contains("direction"));
        assert!(issues[1].message.contains("inverted"));
        assert!(issues[2].message.contains("unknown monster 7"));
    }
}
