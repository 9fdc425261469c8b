//! Map initializer - Builds one map definition and its subgraph
//!
//! `initialize` is a template: it creates the map definition and then runs the
//! three hooks in a fixed order:
//! 1. `create_map_attribute_requirements` (entry gates, none by default)
//! 2. `create_monsters` (new catalog entries, none by default)
//! 3. `create_spawns` (spawn areas, which may reference monsters from step 2)
//!
//! `set_safezone_map` runs in the second pass, once every map is committed.
//! Shipped maps are [`MapSpec`] data values; the trait also lets the registry
//! drive hand-written initializers.

use tracing::{debug, info};

use crate::application::dto::{MapSpec, SafezoneTarget};
use crate::application::ports::outbound::{CommittedMapIndex, EntityContext};
use crate::application::services::{
    AttributeRequirementBuilder, CatalogIndex, MonsterBuilder, SafezoneResolver, SeedError,
    SpawnAreaBuilder,
};
use crate::domain::aggregates::GameConfiguration;
use crate::domain::entities::MapDefinition;
use crate::domain::value_objects::MapDefinitionId;

/// Everything a map initializer may touch during the first pass
pub struct SeedContext<'a, C: EntityContext> {
    pub entities: &'a mut C,
    pub configuration: &'a mut GameConfiguration,
    pub catalog: &'a mut CatalogIndex,
}

impl<'a, C: EntityContext> SeedContext<'a, C> {
    pub fn new(
        entities: &'a mut C,
        configuration: &'a mut GameConfiguration,
        catalog: &'a mut CatalogIndex,
    ) -> Self {
        Self {
            entities,
            configuration,
            catalog,
        }
    }
}

pub trait MapInitializer {
    fn number(&self) -> u8;

    fn name(&self) -> &str;

    fn exp_multiplier(&self) -> f32 {
        1.0
    }

    fn safezone(&self) -> SafezoneTarget {
        SafezoneTarget::SameMap
    }

    fn create_map_attribute_requirements<C: EntityContext>(
        &self,
        _map: &mut MapDefinition,
        _ctx: &mut SeedContext<'_, C>,
    ) -> Result<(), SeedError> {
        Ok(())
    }

    fn create_monsters<C: EntityContext>(
        &self,
        _map: &MapDefinition,
        _ctx: &mut SeedContext<'_, C>,
    ) -> Result<(), SeedError> {
        Ok(())
    }

    fn create_spawns<C: EntityContext>(
        &self,
        map: &mut MapDefinition,
        ctx: &mut SeedContext<'_, C>,
    ) -> Result<(), SeedError>;

    /// Build the map and add it to the configuration
    ///
    /// Not idempotent: a second call fails because the map number is taken.
    fn initialize<C: EntityContext>(
        &self,
        ctx: &mut SeedContext<'_, C>,
    ) -> Result<MapDefinitionId, SeedError> {
        let mut map = MapDefinition::new(ctx.entities.create_new(), self.number(), self.name())
            .with_exp_multiplier(self.exp_multiplier());

        self.create_map_attribute_requirements(&mut map, ctx)?;
        self.create_monsters(&map, ctx)?;
        self.create_spawns(&mut map, ctx)?;

        let id = map.id;
        info!(
            map = map.number,
            name = %map.name,
            spawns = map.spawn_areas.len(),
            requirements = map.requirements.len(),
            "Initialized map"
        );
        ctx.configuration.add_map(map)?;
        Ok(id)
    }

    /// Point the map at its safezone among the committed maps
    fn set_safezone_map(
        &self,
        configuration: &mut GameConfiguration,
        committed: &CommittedMapIndex,
    ) -> Result<MapDefinitionId, SeedError> {
        let target = SafezoneResolver::resolve(self.number(), self.safezone(), committed)?;
        if configuration.find_map(&target).is_none() {
            return Err(SeedError::OrderingViolation(format!(
                "safezone of map {} resolved to {} which is not part of this configuration",
                self.number(),
                target
            )));
        }

        let map = configuration
            .find_map_by_number_mut(self.number())
            .ok_or_else(|| {
                SeedError::OrderingViolation(format!(
                    "map {} has not been initialized",
                    self.number()
                ))
            })?;
        map.safezone_map = Some(target);
        debug!(map = map.number, safezone = %target, "Set safezone map");
        Ok(target)
    }
}

impl MapInitializer for MapSpec {
    fn number(&self) -> u8 {
        self.number
    }

    fn name(&self) -> &str {
        self.name
    }

    fn exp_multiplier(&self) -> f32 {
        self.exp_multiplier
    }

    fn safezone(&self) -> SafezoneTarget {
        self.safezone
    }

    fn create_map_attribute_requirements<C: EntityContext>(
        &self,
        map: &mut MapDefinition,
        ctx: &mut SeedContext<'_, C>,
    ) -> Result<(), SeedError> {
        for requirement in self.requirements {
            AttributeRequirementBuilder::apply(
                ctx.entities,
                ctx.catalog,
                map,
                requirement.stat,
                requirement.minimum_value,
            )?;
        }
        Ok(())
    }

    fn create_monsters<C: EntityContext>(
        &self,
        _map: &MapDefinition,
        ctx: &mut SeedContext<'_, C>,
    ) -> Result<(), SeedError> {
        for monster in self.new_monsters {
            MonsterBuilder::create_monster(ctx.entities, ctx.configuration, ctx.catalog, monster)?;
        }
        Ok(())
    }

    fn create_spawns<C: EntityContext>(
        &self,
        map: &mut MapDefinition,
        ctx: &mut SeedContext<'_, C>,
    ) -> Result<(), SeedError> {
        for spawn in self.spawns {
            let area = SpawnAreaBuilder::from_spec(ctx.entities, ctx.catalog, self.number, spawn)?;
            map.spawn_areas.push(area);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{MonsterSpec, RequirementSpec, SpawnSpec};
    use crate::domain::entities::{AttributeDefinition, MonsterKind};
    use crate::domain::value_objects::{stats, AttributeDefinitionId, Direction};
    use crate::infrastructure::persistence::InMemoryEntityContext;

    const ICARUS_LIKE: MapSpec = MapSpec {
        number: 10,
        name: "Icarus",
        exp_multiplier: 1.5,
        safezone: SafezoneTarget::Map(2),
        requirements: &[RequirementSpec::new(stats::CAN_FLY, 1)],
        new_monsters: &[
            MonsterSpec::monster(69, "Alquamos", &[(stats::LEVEL, 75.0), (stats::MAXIMUM_HEALTH, 11500.0)]),
            MonsterSpec::monster(70, "Queen Rainier", &[(stats::LEVEL, 82.0)]),
        ],
        spawns: &[
            SpawnSpec::area(69, 8, 10, 60, 10, 60),
            SpawnSpec::point(70, 100, 100, Direction::South),
        ],
    };

    fn configuration_with_stats() -> GameConfiguration {
        let mut configuration = GameConfiguration::new();
        for stat in [stats::LEVEL, stats::MAXIMUM_HEALTH, stats::CAN_FLY] {
            configuration
                .add_attribute(AttributeDefinition::new(AttributeDefinitionId::new(), stat))
                .unwrap();
        }
        configuration
    }

    #[test]
    fn test_initialize_builds_the_full_subgraph() {
        let mut entities = InMemoryEntityContext::deterministic();
        let mut configuration = configuration_with_stats();
        let mut catalog = CatalogIndex::build(&configuration);

        let id = {
            let mut ctx = SeedContext::new(&mut entities, &mut configuration, &mut catalog);
            ICARUS_LIKE.initialize(&mut ctx).unwrap()
        };

        let map = configuration.find_map(&id).unwrap();
        assert_eq!(map.number, 10);
        assert_eq!(map.name, "Icarus");
        assert_eq!(map.exp_multiplier, 1.5);
        assert_eq!(map.requirements.len(), 1);
        assert_eq!(map.spawn_areas.len(), 2);
        assert_eq!(map.safezone_map, None);
        assert_eq!(configuration.monsters().len(), 2);
    }

    #[test]
    fn test_new_monsters_share_attribute_definitions() {
        let mut entities = InMemoryEntityContext::deterministic();
        let mut configuration = configuration_with_stats();
        let mut catalog = CatalogIndex::build(&configuration);
        let level = configuration
            .find_attribute_by_designation(stats::LEVEL)
            .unwrap()
            .id;

        {
            let mut ctx = SeedContext::new(&mut entities, &mut configuration, &mut catalog);
            ICARUS_LIKE.initialize(&mut ctx).unwrap();
        }

        let alquamos = configuration.find_monster_by_number(69).unwrap();
        let rainier = configuration.find_monster_by_number(70).unwrap();
        assert_eq!(alquamos.attributes[0].attribute_definition, level);
        assert_eq!(rainier.attributes[0].attribute_definition, level);
        assert_eq!(rainier.attributes[0].value, 82.0);
        assert_eq!(configuration.attributes().len(), 3);
    }

    #[test]
    fn test_initialize_twice_is_rejected() {
        let mut entities = InMemoryEntityContext::deterministic();
        let mut configuration = configuration_with_stats();
        let mut catalog = CatalogIndex::build(&configuration);
        let spec = MapSpec::empty(0, "Lorencia");

        let mut ctx = SeedContext::new(&mut entities, &mut configuration, &mut catalog);
        spec.initialize(&mut ctx).unwrap();
        let second = spec.initialize(&mut ctx);

        assert!(matches!(second, Err(SeedError::Aggregate(_))));
    }

    #[test]
    fn test_set_safezone_map_requires_initialized_map() {
        let mut configuration = configuration_with_stats();
        let committed = CommittedMapIndex::from_committed([(2, MapDefinitionId::new())]);

        let result = ICARUS_LIKE.set_safezone_map(&mut configuration, &committed);

        assert!(matches!(result, Err(SeedError::OrderingViolation(_))));
    }

    #[test]
    fn test_set_safezone_map_points_at_committed_map() {
        let mut configuration = configuration_with_stats();
        let devias = MapDefinition::new(MapDefinitionId::new(), 2, "Devias");
        let icarus = MapDefinition::new(MapDefinitionId::new(), 10, "Icarus");
        let committed = CommittedMapIndex::from_committed([(2, devias.id), (10, icarus.id)]);
        configuration.add_map(devias.clone()).unwrap();
        configuration.add_map(icarus).unwrap();

        let target = ICARUS_LIKE.set_safezone_map(&mut configuration, &committed).unwrap();

        assert_eq!(target, devias.id);
        assert_eq!(
            configuration.find_map_by_number(10).unwrap().safezone_map,
            Some(devias.id)
        );
    }
}
