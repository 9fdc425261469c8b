//! Domain layer - The configuration graph with no infrastructure dependencies
//!
//! This layer contains:
//! - Entities: MapDefinition, SpawnArea, MonsterDefinition, AttributeDefinition
//! - Value Objects: identifiers, spawn triggers, regions, stat names
//! - Aggregates: GameConfiguration aggregate root

pub mod aggregates;
pub mod entities;
pub mod value_objects;
