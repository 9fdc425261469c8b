//! Domain entities - Configuration objects with identity

mod attribute_definition;
mod map_definition;
mod monster_definition;

pub use attribute_definition::AttributeDefinition;
pub use map_definition::{AttributeRequirement, MapDefinition, SpawnArea};
pub use monster_definition::{MonsterAttributeValue, MonsterDefinition, MonsterKind};
