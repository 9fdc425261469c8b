//! Value objects - Immutable objects defined by their attributes

mod ids;
mod spawn;
pub mod stats;

pub use ids::*;
pub use spawn::{Direction, MonsterReference, SpawnRegion, SpawnTrigger};
