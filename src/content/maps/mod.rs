//! Shipped maps
//!
//! Each map is a constant [`MapSpec`]. [`all`] lists them in seeding order;
//! safezone targets may point at maps later in the list since they are only
//! resolved after the whole list has been committed.

mod arena;
mod atlans;
mod blood_castle;
mod devias;
mod dungeon;
mod icarus;
mod lorencia;
mod lost_tower;
mod noria;
mod tarkan;

pub use arena::ARENA;
pub use atlans::ATLANS;
pub use blood_castle::BLOOD_CASTLE_1;
pub use devias::DEVIAS;
pub use dungeon::DUNGEON;
pub use icarus::ICARUS;
pub use lorencia::LORENCIA;
pub use lost_tower::LOST_TOWER;
pub use noria::NORIA;
pub use tarkan::TARKAN;

use crate::application::dto::MapSpec;

/// Every shipped map in seeding order
pub fn all() -> Vec<MapSpec> {
    vec![
        LORENCIA,
        DUNGEON,
        DEVIAS,
        NORIA,
        LOST_TOWER,
        ARENA,
        ATLANS,
        TARKAN,
        ICARUS,
        BLOOD_CASTLE_1,
    ]
}
