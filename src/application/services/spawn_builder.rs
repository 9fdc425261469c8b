//! Spawn area builder - Turns spawn declarations into spawn areas
//!
//! Two shapes are supported:
//! - point form: one monster at an exact cell with a fixed facing
//! - region form: any quantity (including zero) within an inclusive region,
//!   facing chosen by the server at spawn time

use std::time::Duration;

use tracing::debug;

use crate::application::dto::SpawnSpec;
use crate::application::ports::outbound::EntityContext;
use crate::application::services::{CatalogIndex, SeedError};
use crate::domain::entities::SpawnArea;
use crate::domain::value_objects::{Direction, MonsterReference, SpawnRegion, SpawnTrigger};

pub struct SpawnAreaBuilder;

impl SpawnAreaBuilder {
    /// Place a single monster at `(x, y)` facing `direction`
    pub fn point<C: EntityContext>(
        entities: &mut C,
        monster: MonsterReference,
        x: u8,
        y: u8,
        direction: Direction,
    ) -> SpawnArea {
        SpawnArea::at_point(entities.create_new(), monster, x, y, direction)
    }

    /// Place `quantity` monsters within the inclusive region
    #[allow(clippy::too_many_arguments)]
    pub fn region<C: EntityContext>(
        entities: &mut C,
        map: u8,
        monster: MonsterReference,
        quantity: u16,
        delay: Option<Duration>,
        trigger: SpawnTrigger,
        x_min: u8,
        x_max: u8,
        y_min: u8,
        y_max: u8,
    ) -> Result<SpawnArea, SeedError> {
        let region = SpawnRegion::new(x_min, x_max, y_min, y_max).map_err(|e| {
            SeedError::InvalidSpawn {
                map,
                reason: format!("monster {}: {}", monster.number, e),
            }
        })?;

        let spawn = SpawnArea::in_region(entities.create_new(), monster, quantity, trigger, region);
        Ok(match delay {
            Some(delay) => spawn.with_spawn_delay(delay),
            None => spawn,
        })
    }

    /// Build the spawn area of a declaration, resolving its monster number
    pub fn from_spec<C: EntityContext>(
        entities: &mut C,
        catalog: &CatalogIndex,
        map: u8,
        spec: &SpawnSpec,
    ) -> Result<SpawnArea, SeedError> {
        let monster = catalog.monster(spec.monster_number(), map)?;
        let spawn = match *spec {
            SpawnSpec::Point { x, y, direction, .. } => {
                Self::point(entities, monster, x, y, direction)
            }
            SpawnSpec::Region {
                quantity,
                delay,
                trigger,
                x_min,
                x_max,
                y_min,
                y_max,
                ..
            } => Self::region(
                entities, map, monster, quantity, delay, trigger, x_min, x_max, y_min, y_max,
            )?,
        };

        debug!(
            map,
            monster = monster.number,
            quantity = spawn.quantity,
            trigger = %spawn.trigger,
            "Created spawn area"
        );
        Ok(spawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::MonsterDefinitionId;
    use crate::infrastructure::persistence::InMemoryEntityContext;

    fn catalog_with(numbers: &[u16]) -> CatalogIndex {
        let mut catalog = CatalogIndex::default();
        for number in numbers {
            catalog.register_monster(*number, MonsterDefinitionId::new());
        }
        catalog
    }

    #[test]
    fn test_point_form_collapses_to_single_cell() {
        let mut entities = InMemoryEntityContext::deterministic();
        let catalog = catalog_with(&[251]);

        for direction in Direction::ALL {
            let spec = SpawnSpec::point(251, 116, 141, direction);
            let spawn = SpawnAreaBuilder::from_spec(&mut entities, &catalog, 0, &spec).unwrap();

            assert_eq!(spawn.region, SpawnRegion::point(116, 141));
            assert_eq!(spawn.quantity, 1);
            assert_eq!(spawn.trigger, SpawnTrigger::Automatic);
            assert_eq!(spawn.direction, Some(direction));
        }
    }

    #[test]
    fn test_degenerate_region_yields_single_cell() {
        let mut entities = InMemoryEntityContext::deterministic();
        let catalog = catalog_with(&[240]);
        let spec = SpawnSpec::area(240, 1, 58, 58, 140, 140);

        let spawn = SpawnAreaBuilder::from_spec(&mut entities, &catalog, 0, &spec).unwrap();

        assert!(spawn.region.is_point());
        assert_eq!(spawn.region, SpawnRegion::point(58, 140));
        assert_eq!(spawn.direction, None);
    }

    #[test]
    fn test_region_with_zero_quantity_is_kept() {
        let mut entities = InMemoryEntityContext::deterministic();
        let catalog = catalog_with(&[86]);
        let spec = SpawnSpec::region(
            86,
            0,
            Some(Duration::from_secs(5)),
            SpawnTrigger::ManuallyInvoked,
            10,
            30,
            40,
            60,
        );

        let spawn = SpawnAreaBuilder::from_spec(&mut entities, &catalog, 11, &spec).unwrap();

        assert_eq!(spawn.quantity, 0);
        assert!(spawn.is_disabled());
        assert_eq!(spawn.trigger, SpawnTrigger::ManuallyInvoked);
        assert_eq!(spawn.spawn_delay, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_inverted_region_is_rejected() {
        let mut entities = InMemoryEntityContext::deterministic();
        let catalog = catalog_with(&[3]);
        let spec = SpawnSpec::area(3, 4, 140, 130, 10, 20);

        let result = SpawnAreaBuilder::from_spec(&mut entities, &catalog, 0, &spec);

        assert!(matches!(result, Err(SeedError::InvalidSpawn { map: 0, .. })));
    }

    #[test]
    fn test_unknown_monster_is_a_lookup_failure() {
        let mut entities = InMemoryEntityContext::deterministic();
        let catalog = catalog_with(&[]);
        let spec = SpawnSpec::point(251, 1, 1, Direction::South);

        let result = SpawnAreaBuilder::from_spec(&mut entities, &catalog, 0, &spec);

        assert!(result.unwrap_err().is_lookup_failure());
        assert_eq!(entities.allocated(), 0);
    }
}
