//! Application services - Seeding use cases
//!
//! Builders turn authoring data into configuration entities; the registry
//! drives the map initializers through the two seeding passes.

mod catalog_index;
mod initializer_registry;
mod map_initializer;
mod monster_builder;
mod requirement_builder;
mod safezone_resolver;
mod seed_error;
mod spawn_builder;
mod validation;

pub use catalog_index::CatalogIndex;
pub use initializer_registry::InitializerRegistry;
pub use map_initializer::{MapInitializer, SeedContext};
pub use monster_builder::MonsterBuilder;
pub use requirement_builder::AttributeRequirementBuilder;
pub use safezone_resolver::SafezoneResolver;
pub use seed_error::SeedError;
pub use spawn_builder::SpawnAreaBuilder;
pub use validation::{validate_configuration, ValidationStage};
