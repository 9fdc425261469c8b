//! In-memory configuration store

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{CommittedMapIndex, ConfigurationStorePort};
use crate::domain::aggregates::GameConfiguration;

/// Store keeping the last committed configuration in memory
#[derive(Clone, Default)]
pub struct InMemoryConfigurationStore {
    committed: Arc<RwLock<Option<GameConfiguration>>>,
}

impl InMemoryConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(configuration: Option<&GameConfiguration>) -> CommittedMapIndex {
        CommittedMapIndex::from_committed(
            configuration
                .into_iter()
                .flat_map(|c| c.maps())
                .map(|m| (m.number, m.id)),
        )
    }
}

#[async_trait]
impl ConfigurationStorePort for InMemoryConfigurationStore {
    async fn commit(&self, configuration: &GameConfiguration) -> Result<CommittedMapIndex> {
        let mut committed = self.committed.write().await;
        *committed = Some(configuration.clone());
        tracing::debug!(maps = configuration.maps().len(), "Committed configuration to memory");
        Ok(Self::index_of((*committed).as_ref()))
    }

    async fn load_map_index(&self) -> Result<CommittedMapIndex> {
        let committed = self.committed.read().await;
        Ok(Self::index_of((*committed).as_ref()))
    }

    async fn load_configuration(&self) -> Result<GameConfiguration> {
        Ok(self.committed.read().await.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MapDefinition;
    use crate::domain::value_objects::MapDefinitionId;

    #[tokio::test]
    async fn test_commit_returns_committed_identities() {
        let store = InMemoryConfigurationStore::new();
        let mut configuration = GameConfiguration::new();
        let lorencia = MapDefinitionId::new();
        configuration
            .add_map(MapDefinition::new(lorencia, 0, "Lorencia"))
            .unwrap();

        assert!(store.load_map_index().await.unwrap().is_empty());
        let index = store.commit(&configuration).await.unwrap();

        assert_eq!(index.get(0), Some(lorencia));
        assert_eq!(store.load_map_index().await.unwrap(), index);
    }

    #[tokio::test]
    async fn test_later_changes_are_not_visible_until_committed() {
        let store = InMemoryConfigurationStore::new();
        let mut configuration = GameConfiguration::new();
        store.commit(&configuration).await.unwrap();

        configuration
            .add_map(MapDefinition::new(MapDefinitionId::new(), 0, "Lorencia"))
            .unwrap();

        assert!(store.load_map_index().await.unwrap().is_empty());
        assert!(store.load_configuration().await.unwrap().maps().is_empty());
    }
}
