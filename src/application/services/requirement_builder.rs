//! Attribute requirement builder - Entry gates of a map
//!
//! A map is only enterable by an actor satisfying every requirement. This
//! builder only records them; enforcement belongs to the game server.

use tracing::warn;

use crate::application::ports::outbound::EntityContext;
use crate::application::services::{CatalogIndex, SeedError};
use crate::domain::entities::{AttributeRequirement, MapDefinition};

/// What happened when a requirement was applied to a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementOutcome {
    Added,
    /// The map already required this stat; the new minimum replaced the old one
    Replaced { previous: i32 },
}

pub struct AttributeRequirementBuilder;

impl AttributeRequirementBuilder {
    /// Require `stat >= minimum_value` to enter `map`
    ///
    /// A stat appears at most once per map. Applying it again overwrites the
    /// earlier minimum and logs a warning.
    pub fn apply<C: EntityContext>(
        entities: &mut C,
        catalog: &CatalogIndex,
        map: &mut MapDefinition,
        stat: &str,
        minimum_value: i32,
    ) -> Result<RequirementOutcome, SeedError> {
        let attribute = catalog.attribute(stat, || format!("requirement of map {}", map.number))?;

        if let Some(existing) = map.requirement_for_mut(&attribute) {
            let previous = existing.minimum_value;
            existing.minimum_value = minimum_value;
            warn!(
                map = map.number,
                stat,
                previous,
                minimum_value,
                "Requirement declared twice, keeping the latest minimum"
            );
            return Ok(RequirementOutcome::Replaced { previous });
        }

        map.requirements.push(AttributeRequirement::new(
            entities.create_new(),
            attribute,
            stat,
            minimum_value,
        ));
        Ok(RequirementOutcome::Added)
    }
}
