//! Monster builder - Adds monster and attribute definitions to the shared catalogs

use tracing::debug;

use crate::application::dto::MonsterSpec;
use crate::application::ports::outbound::EntityContext;
use crate::application::services::{CatalogIndex, SeedError};
use crate::domain::aggregates::{AggregateError, GameConfiguration};
use crate::domain::entities::{AttributeDefinition, MonsterDefinition};
use crate::domain::value_objects::{AttributeDefinitionId, MonsterDefinitionId};

/// Creates catalog entries, reusing existing ones wherever an identity exists
pub struct MonsterBuilder;

impl MonsterBuilder {
    /// Return the attribute definition with this designation, creating it only
    /// if the catalog does not have it yet
    pub fn ensure_attribute<C: EntityContext>(
        entities: &mut C,
        configuration: &mut GameConfiguration,
        catalog: &mut CatalogIndex,
        designation: &str,
        description: &str,
    ) -> Result<AttributeDefinitionId, SeedError> {
        if let Ok(existing) = catalog.attribute(designation, String::new) {
            return Ok(existing);
        }

        let id = entities.create_new();
        configuration.add_attribute(
            AttributeDefinition::new(id, designation).with_description(description),
        )?;
        catalog.register_attribute(designation, id);
        Ok(id)
    }

    /// Create a new monster definition and add it to the catalog
    ///
    /// Attribute values reference the catalog's attribute definitions; a stat
    /// missing from the catalog fails the whole build.
    pub fn create_monster<C: EntityContext>(
        entities: &mut C,
        configuration: &mut GameConfiguration,
        catalog: &mut CatalogIndex,
        spec: &MonsterSpec,
    ) -> Result<MonsterDefinitionId, SeedError> {
        if catalog.contains_monster(spec.number) {
            return Err(AggregateError::Duplicate(format!(
                "Monster number {} ('{}') is already in the catalog",
                spec.number, spec.designation
            ))
            .into());
        }

        let id = entities.create_new();
        let mut monster = MonsterDefinition::new(id, spec.number, spec.designation, spec.kind);
        for (stat, value) in spec.attributes {
            let attribute = catalog.attribute(stat, || {
                format!("attribute of monster {} '{}'", spec.number, spec.designation)
            })?;
            monster = monster.with_attribute(attribute, *value);
        }

        configuration.add_monster(monster)?;
        catalog.register_monster(spec.number, id);
        debug!(number = spec.number, designation = spec.designation, "Created monster definition");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MonsterKind;
    use crate::domain::value_objects::stats;
    use crate::infrastructure::persistence::InMemoryEntityContext;

    #[test]
    fn test_ensure_attribute_reuses_existing_definition() {
        let mut entities = InMemoryEntityContext::deterministic();
        let mut configuration = GameConfiguration::new();
        let mut catalog = CatalogIndex::default();

        let first = MonsterBuilder::ensure_attribute(&mut entities, &mut configuration, &mut catalog, stats::LEVEL, "")
            .unwrap();
        let second = MonsterBuilder::ensure_attribute(&mut entities, &mut configuration, &mut catalog, stats::LEVEL, "")
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(configuration.attributes().len(), 1);
    }

    #[test]
    fn test_create_monster_rejects_taken_number() {
        let mut entities = InMemoryEntityContext::deterministic();
        let mut configuration = GameConfiguration::new();
        let mut catalog = CatalogIndex::default();
        let spec = MonsterSpec::npc(240, "Safety Guard", MonsterKind::Guard);

        MonsterBuilder::create_monster(&mut entities, &mut configuration, &mut catalog, &spec).unwrap();
        let result = MonsterBuilder::create_monster(&mut entities, &mut configuration, &mut catalog, &spec);

        assert!(matches!(result, Err(SeedError::Aggregate(AggregateError::Duplicate(_)))));
        assert_eq!(configuration.monsters().len(), 1);
    }

    #[test]
    fn test_create_monster_with_unknown_stat_fails() {
        let mut entities = InMemoryEntityContext::deterministic();
        let mut configuration = GameConfiguration::new();
        let mut catalog = CatalogIndex::default();
        let spec = MonsterSpec::monster(3, "Spider", &[(stats::LEVEL, 2.0)]);

        let result = MonsterBuilder::create_monster(&mut entities, &mut configuration, &mut catalog, &spec);

        assert!(result.unwrap_err().is_lookup_failure());
        assert!(configuration.monsters().is_empty());
    }
}
