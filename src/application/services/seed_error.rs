//! Seeding errors - Every failure aborts the seeding run

use crate::domain::aggregates::AggregateError;

/// The catalog a lookup was performed against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Monster,
    Attribute,
    Map,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Monster => f.write_str("Monster"),
            CatalogKind::Attribute => f.write_str("Attribute"),
            CatalogKind::Map => f.write_str("Map"),
        }
    }
}

/// Errors that can occur while seeding the configuration
///
/// None of them is recoverable: the content or the bootstrap order is wrong,
/// and running again without fixing it fails the same way.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("{kind} '{key}' not found ({context})")]
    LookupFailure {
        kind: CatalogKind,
        key: String,
        context: String,
    },

    #[error("Map number {number} is claimed by both '{first}' and '{second}'")]
    DuplicateIdentity {
        number: u8,
        first: String,
        second: String,
    },

    #[error("Ordering violation: {0}")]
    OrderingViolation(String),

    #[error("Invalid spawn on map {map}: {reason}")]
    InvalidSpawn { map: u8, reason: String },

    #[error("Configuration rejected: {0}")]
    Aggregate(#[from] AggregateError),
}

impl SeedError {
    pub fn monster_not_found(number: u16, map: u8) -> Self {
        SeedError::LookupFailure {
            kind: CatalogKind::Monster,
            key: number.to_string(),
            context: format!("referenced by map {}", map),
        }
    }

    pub fn attribute_not_found(designation: &str, context: impl Into<String>) -> Self {
        SeedError::LookupFailure {
            kind: CatalogKind::Attribute,
            key: designation.to_string(),
            context: context.into(),
        }
    }

    pub fn map_not_found(number: u8, referenced_by: u8) -> Self {
        SeedError::LookupFailure {
            kind: CatalogKind::Map,
            key: number.to_string(),
            context: format!("safezone of map {}", referenced_by),
        }
    }

    #[cfg(test)]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, SeedError::LookupFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failure_message_names_the_reference() {
        let error = SeedError::monster_not_found(240, 3);
        assert_eq!(error.to_string(), "Monster '240' not found (referenced by map 3)");
        assert!(error.is_lookup_failure());

        let error = SeedError::map_not_found(99, 4);
        assert_eq!(error.to_string(), "Map '99' not found (safezone of map 4)");
    }
}
