//! Configuration store port - Durable commit of the configuration graph
//!
//! Committing is what gives maps a stable identity other maps may refer to.
//! The only way to obtain a [`CommittedMapIndex`] in production code is from
//! a store, which makes "phase 1 was committed" an explicit input of the
//! safezone pass instead of an ordering convention.

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::aggregates::GameConfiguration;
use crate::domain::value_objects::MapDefinitionId;

/// Port for persisting the configuration graph
#[async_trait]
pub trait ConfigurationStorePort: Send + Sync {
    /// Durably store the whole configuration, replacing any previous one,
    /// and return the committed map identities read back from the store
    async fn commit(&self, configuration: &GameConfiguration) -> Result<CommittedMapIndex>;

    /// Read the map identities of the currently stored configuration
    async fn load_map_index(&self) -> Result<CommittedMapIndex>;

    /// Read the whole stored configuration back; empty if nothing was committed
    async fn load_configuration(&self) -> Result<GameConfiguration>;
}

/// Read-only index of committed map identities by map number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommittedMapIndex {
    maps: BTreeMap<u8, MapDefinitionId>,
}

impl CommittedMapIndex {
    /// Build the index from identities that were read back from a store
    pub fn from_committed(entries: impl IntoIterator<Item = (u8, MapDefinitionId)>) -> Self {
        Self {
            maps: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, number: u8) -> Option<MapDefinitionId> {
        self.maps.get(&number).copied()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
