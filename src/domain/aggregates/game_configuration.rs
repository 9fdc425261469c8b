//! Game Configuration Aggregate - The root of the seeded configuration graph
//!
//! The configuration owns the shared catalogs (attribute and monster
//! definitions) and the output map list. All additions go through this
//! aggregate root so the identity invariants hold at every point.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AttributeDefinition, MapDefinition, MonsterDefinition};
use crate::domain::value_objects::{AttributeDefinitionId, MapDefinitionId, MonsterDefinitionId};

/// The Game Configuration Aggregate Root
///
/// # Invariants
/// - map numbers are unique
/// - monster numbers are unique
/// - attribute designations are unique
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfiguration {
    maps: Vec<MapDefinition>,
    monsters: Vec<MonsterDefinition>,
    attributes: Vec<AttributeDefinition>,
}

/// Collection sizes captured before a seeding pass, used to undo it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationCheckpoint {
    maps: usize,
    monsters: usize,
    attributes: usize,
}

impl GameConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn maps(&self) -> &[MapDefinition] {
        &self.maps
    }

    pub fn monsters(&self) -> &[MonsterDefinition] {
        &self.monsters
    }

    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    // ========================================================================
    // Finders
    // ========================================================================

    pub fn find_map(&self, id: &MapDefinitionId) -> Option<&MapDefinition> {
        self.maps.iter().find(|m| &m.id == id)
    }

    pub fn find_map_by_number(&self, number: u8) -> Option<&MapDefinition> {
        self.maps.iter().find(|m| m.number == number)
    }

    pub fn find_map_by_number_mut(&mut self, number: u8) -> Option<&mut MapDefinition> {
        self.maps.iter_mut().find(|m| m.number == number)
    }

    pub fn find_monster(&self, id: &MonsterDefinitionId) -> Option<&MonsterDefinition> {
        self.monsters.iter().find(|m| &m.id == id)
    }

    pub fn find_monster_by_number(&self, number: u16) -> Option<&MonsterDefinition> {
        self.monsters.iter().find(|m| m.number == number)
    }

    pub fn find_attribute(&self, id: &AttributeDefinitionId) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|a| &a.id == id)
    }

    pub fn find_attribute_by_designation(&self, designation: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|a| a.designation == designation)
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Add a map to the configuration
    ///
    /// # Invariants
    /// - Map name must not be empty
    /// - Map number must not be taken
    pub fn add_map(&mut self, map: MapDefinition) -> Result<(), AggregateError> {
        if map.name.trim().is_empty() {
            return Err(AggregateError::ValidationError(format!(
                "Map {} has an empty name",
                map.number
            )));
        }
        if let Some(existing) = self.find_map_by_number(map.number) {
            return Err(AggregateError::Duplicate(format!(
                "Map number {} is already used by '{}'",
                map.number, existing.name
            )));
        }
        self.maps.push(map);
        Ok(())
    }

    /// Add a monster definition to the shared catalog
    pub fn add_monster(&mut self, monster: MonsterDefinition) -> Result<(), AggregateError> {
        if monster.designation.trim().is_empty() {
            return Err(AggregateError::ValidationError(format!(
                "Monster {} has an empty designation",
                monster.number
            )));
        }
        if let Some(existing) = self.find_monster_by_number(monster.number) {
            return Err(AggregateError::Duplicate(format!(
                "Monster number {} is already used by '{}'",
                monster.number, existing.designation
            )));
        }
        self.monsters.push(monster);
        Ok(())
    }

    /// Add an attribute definition to the shared catalog
    pub fn add_attribute(&mut self, attribute: AttributeDefinition) -> Result<(), AggregateError> {
        if self
            .find_attribute_by_designation(&attribute.designation)
            .is_some()
        {
            return Err(AggregateError::Duplicate(format!(
                "Attribute '{}' is already defined",
                attribute.designation
            )));
        }
        self.attributes.push(attribute);
        Ok(())
    }

    // ========================================================================
    // Pass Rollback
    // ========================================================================

    /// Capture the current collection sizes
    pub fn checkpoint(&self) -> ConfigurationCheckpoint {
        ConfigurationCheckpoint {
            maps: self.maps.len(),
            monsters: self.monsters.len(),
            attributes: self.attributes.len(),
        }
    }

    /// Drop everything appended since the checkpoint was taken
    pub fn rollback(&mut self, checkpoint: ConfigurationCheckpoint) {
        self.maps.truncate(checkpoint.maps);
        self.monsters.truncate(checkpoint.monsters);
        self.attributes.truncate(checkpoint.attributes);
    }
}

/// Errors that can occur when modifying the aggregate
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateError {
    /// A validation rule was violated
    ValidationError(String),
    /// An entity with the same identity already exists
    Duplicate(String),
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AggregateError::Duplicate(msg) => write!(f, "Duplicate: {}", msg),
        }
    }
}

impl std::error::Error for AggregateError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MonsterKind;

    #[test]
    fn test_map_numbers_are_unique() {
        let mut configuration = GameConfiguration::new();
        configuration
            .add_map(MapDefinition::new(MapDefinitionId::new(), 0, "Lorencia"))
            .unwrap();

        let result = configuration.add_map(MapDefinition::new(MapDefinitionId::new(), 0, "Lorencia 2"));

        assert!(matches!(result, Err(AggregateError::Duplicate(_))));
        assert_eq!(configuration.maps().len(), 1);
    }

    #[test]
    fn test_empty_map_name_is_rejected() {
        let mut configuration = GameConfiguration::new();
        let result = configuration.add_map(MapDefinition::new(MapDefinitionId::new(), 3, "  "));
        assert!(matches!(result, Err(AggregateError::ValidationError(_))));
    }

    #[test]
    fn test_rollback_drops_entities_added_after_checkpoint() {
        let mut configuration = GameConfiguration::new();
        configuration
            .add_attribute(AttributeDefinition::new(AttributeDefinitionId::new(), "Level"))
            .unwrap();
        let checkpoint = configuration.checkpoint();

        configuration
            .add_monster(MonsterDefinition::new(MonsterDefinitionId::new(), 3, "Spider", MonsterKind::Monster))
            .unwrap();
        configuration
            .add_map(MapDefinition::new(MapDefinitionId::new(), 0, "Lorencia"))
            .unwrap();
        configuration.rollback(checkpoint);

        assert!(configuration.maps().is_empty());
        assert!(configuration.monsters().is_empty());
        assert_eq!(configuration.attributes().len(), 1);
    }
}
