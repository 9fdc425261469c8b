//! Seeder configuration

use anyhow::{Context, Result};
use serde::Deserialize;

/// Seeder configuration loaded from `MAPSEED_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Store backend: "memory" or "sqlite"
    pub store_backend: String,
    /// Path to the SQLite database file, or `:memory:` for a throwaway database
    pub sqlite_path: String,
    /// Where to write the JSON export of the seeded configuration
    pub export_path: Option<String>,
    /// Include spawns with a quantity of zero in the export
    pub export_disabled_spawns: bool,
    /// Allocate sequential identities so repeated runs produce identical ids
    pub deterministic_ids: bool,
}

impl SeedConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        config::Config::builder()
            .set_default("store_backend", "sqlite")?
            .set_default("sqlite_path", "./data/configuration.db")?
            .set_default("deterministic_ids", false)?
            .set_default("export_disabled_spawns", true)?
            .add_source(config::Environment::with_prefix("MAPSEED").try_parsing(true))
            .build()
            .context("Failed to read MAPSEED_* environment variables")?
            .try_deserialize()
            .context("Invalid seeder configuration")
    }
}
