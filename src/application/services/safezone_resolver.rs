//! Safezone resolver - Finds the committed map a safezone declaration points at

use crate::application::dto::SafezoneTarget;
use crate::application::ports::outbound::CommittedMapIndex;
use crate::application::services::SeedError;
use crate::domain::value_objects::MapDefinitionId;

pub struct SafezoneResolver;

impl SafezoneResolver {
    /// Resolve the safezone of map `map_number` among committed maps
    ///
    /// A target that is not committed is a dangling reference in the content.
    pub fn resolve(
        map_number: u8,
        target: SafezoneTarget,
        committed: &CommittedMapIndex,
    ) -> Result<MapDefinitionId, SeedError> {
        let target_number = target.target_number(map_number);
        committed
            .get(target_number)
            .ok_or_else(|| SeedError::map_not_found(target_number, map_number))
    }
}
