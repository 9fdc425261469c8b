//! Catalog index - Key lookups into the shared monster and attribute catalogs
//!
//! Built once per seeding run from the populated catalogs and handed to every
//! builder call, so content lookups never scan the catalog collections.

use std::collections::HashMap;

use tracing::debug;

use crate::application::services::SeedError;
use crate::domain::aggregates::GameConfiguration;
use crate::domain::value_objects::{AttributeDefinitionId, MonsterDefinitionId, MonsterReference};

#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    monsters: HashMap<u16, MonsterDefinitionId>,
    attributes: HashMap<String, AttributeDefinitionId>,
}

impl CatalogIndex {
    /// Index the catalogs of a configuration
    pub fn build(configuration: &GameConfiguration) -> Self {
        let monsters = configuration
            .monsters()
            .iter()
            .map(|m| (m.number, m.id))
            .collect::<HashMap<_, _>>();
        let attributes = configuration
            .attributes()
            .iter()
            .map(|a| (a.designation.clone(), a.id))
            .collect::<HashMap<_, _>>();

        debug!(
            monsters = monsters.len(),
            attributes = attributes.len(),
            "Built catalog index"
        );

        Self {
            monsters,
            attributes,
        }
    }

    /// Resolve a monster number referenced by a map
    pub fn monster(&self, number: u16, map: u8) -> Result<MonsterReference, SeedError> {
        self.monsters
            .get(&number)
            .map(|id| MonsterReference::new(*id, number))
            .ok_or_else(|| SeedError::monster_not_found(number, map))
    }

    /// Resolve an attribute definition by its designation
    ///
    /// Every caller asking for the same designation gets the same identity.
    pub fn attribute(
        &self,
        designation: &str,
        context: impl FnOnce() -> String,
    ) -> Result<AttributeDefinitionId, SeedError> {
        self.attributes
            .get(designation)
            .copied()
            .ok_or_else(|| SeedError::attribute_not_found(designation, context()))
    }

    pub fn contains_monster(&self, number: u16) -> bool {
        self.monsters.contains_key(&number)
    }

    /// Make a monster created during the run visible to later lookups
    pub fn register_monster(&mut self, number: u16, id: MonsterDefinitionId) {
        self.monsters.insert(number, id);
    }

    pub fn register_attribute(&mut self, designation: impl Into<String>, id: AttributeDefinitionId) {
        self.attributes.insert(designation.into(), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AttributeDefinition, MonsterDefinition, MonsterKind};

    #[test]
    fn test_lookups_resolve_catalog_entries() {
        let mut configuration = GameConfiguration::new();
        let level = AttributeDefinitionId::new();
        let spider = MonsterDefinitionId::new();
        configuration
            .add_attribute(AttributeDefinition::new(level, "Level"))
            .unwrap();
        configuration
            .add_monster(MonsterDefinition::new(spider, 3, "Spider", MonsterKind::Monster))
            .unwrap();

        let index = CatalogIndex::build(&configuration);

        assert_eq!(index.monster(3, 0).unwrap(), MonsterReference::new(spider, 3));
        assert_eq!(index.attribute("Level", String::new).unwrap(), level);
    }

    #[test]
    fn test_missing_monster_is_a_lookup_failure() {
        let index = CatalogIndex::build(&GameConfiguration::new());
        let error = index.monster(7, 2).unwrap_err();
        assert!(error.is_lookup_failure());
        assert!(error.to_string().contains("map 2"));
    }

    #[test]
    fn test_registered_monster_becomes_visible() {
        let mut index = CatalogIndex::default();
        let id = MonsterDefinitionId::new();
        assert!(!index.contains_monster(69));

        index.register_monster(69, id);

        assert_eq!(index.monster(69, 10).unwrap().id, id);
        assert!(index.contains_monster(69));
    }
}
