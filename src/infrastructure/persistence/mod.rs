//! Persistence adapters
//!
//! This module implements the entity context and the configuration store
//! port, with an in-memory and a SQLite backend.

mod entity_context;
mod memory_store;
mod sqlite_store;

pub use entity_context::InMemoryEntityContext;
pub use memory_store::InMemoryConfigurationStore;
pub use sqlite_store::SqliteConfigurationStore;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::outbound::{CommittedMapIndex, ConfigurationStorePort};
use crate::domain::aggregates::GameConfiguration;
use crate::infrastructure::config::SeedConfig;

/// `sqlite_path` value selecting a throwaway SQLite database
pub const IN_MEMORY_SQLITE: &str = ":memory:";

/// Enum wrapper for store backends to enable runtime selection
#[derive(Clone)]
pub enum ConfigurationStoreBackend {
    Memory(InMemoryConfigurationStore),
    Sqlite(SqliteConfigurationStore),
}

impl ConfigurationStoreBackend {
    /// Create the store selected by the configuration
    pub async fn from_config(config: &SeedConfig) -> Result<Self> {
        match config.store_backend.as_str() {
            "memory" => Ok(Self::Memory(InMemoryConfigurationStore::new())),
            "sqlite" if config.sqlite_path == IN_MEMORY_SQLITE => {
                Ok(Self::Sqlite(SqliteConfigurationStore::in_memory().await?))
            }
            "sqlite" => Ok(Self::Sqlite(
                SqliteConfigurationStore::connect(&config.sqlite_path).await?,
            )),
            backend => anyhow::bail!("Unsupported store backend: {}", backend),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

#[async_trait]
impl ConfigurationStorePort for ConfigurationStoreBackend {
    async fn commit(&self, configuration: &GameConfiguration) -> Result<CommittedMapIndex> {
        match self {
            Self::Memory(store) => store.commit(configuration).await,
            Self::Sqlite(store) => store.commit(configuration).await,
        }
    }

    async fn load_map_index(&self) -> Result<CommittedMapIndex> {
        match self {
            Self::Memory(store) => store.load_map_index().await,
            Self::Sqlite(store) => store.load_map_index().await,
        }
    }

    async fn load_configuration(&self) -> Result<GameConfiguration> {
        match self {
            Self::Memory(store) => store.load_configuration().await,
            Self::Sqlite(store) => store.load_configuration().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(store_backend: &str, sqlite_path: &str) -> SeedConfig {
        SeedConfig {
            store_backend: store_backend.to_string(),
            sqlite_path: sqlite_path.to_string(),
            export_path: None,
            export_disabled_spawns: true,
            deterministic_ids: true,
        }
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let result = ConfigurationStoreBackend::from_config(&config("postgres", "")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_memory_backend_commits() {
        let store = ConfigurationStoreBackend::from_config(&config("memory", ""))
            .await
            .unwrap();

        let index = store.commit(&GameConfiguration::new()).await.unwrap();

        assert_eq!(store.name(), "memory");
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn test_sqlite_backend_can_run_in_memory() {
        let store = ConfigurationStoreBackend::from_config(&config("sqlite", IN_MEMORY_SQLITE))
            .await
            .unwrap();

        store.commit(&GameConfiguration::new()).await.unwrap();

        assert_eq!(store.name(), "sqlite");
        assert!(store.load_configuration().await.unwrap().maps().is_empty());
    }
}
