//! Strongly-typed identifiers for configuration entities
//!
//! Identities are allocated by an `EntityContext`; `new()` is only a
//! convenience for tests and ad-hoc construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(MapDefinitionId);
define_id!(MonsterDefinitionId);
define_id!(AttributeDefinitionId);
define_id!(
    /// Identity of one spawn declaration; a map may spawn the same monster many times
    SpawnAreaId
);
define_id!(AttributeRequirementId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_uuids() {
        let id = MapDefinitionId::from(Uuid::from_u128(7));

        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, "\"00000000-0000-0000-0000-000000000007\"");
        assert_eq!(serde_json::from_str::<MapDefinitionId>(&json).unwrap(), id);
    }
}
