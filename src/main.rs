//! MapSeed Engine - Seeds the map and spawn configuration of a game server
//!
//! A seeding run:
//! - Populates the shared attribute and monster catalogs
//! - Builds every shipped map with its requirements, monsters and spawns
//! - Commits the maps, then resolves safezones against the committed identities
//! - Validates and commits the finished configuration, optionally exporting it as JSON

mod application;
mod content;
mod domain;
mod infrastructure;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::ports::outbound::{ConfigurationStorePort, EntityContext};
use crate::application::services::{validate_configuration, InitializerRegistry, ValidationStage};
use crate::domain::aggregates::GameConfiguration;
use crate::infrastructure::config::SeedConfig;
use crate::infrastructure::export::ConfigurationSnapshotBuilder;
use crate::infrastructure::persistence::{ConfigurationStoreBackend, InMemoryEntityContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mapseed_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MapSeed Engine");

    let config = SeedConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Store backend: {}", config.store_backend);
    if config.store_backend == "sqlite" {
        tracing::info!("  SQLite: {}", config.sqlite_path);
    }
    tracing::info!("  Deterministic ids: {}", config.deterministic_ids);

    let mut entities = if config.deterministic_ids {
        InMemoryEntityContext::deterministic()
    } else {
        InMemoryEntityContext::new()
    };
    let mut configuration = GameConfiguration::new();

    let catalogs = content::populate_catalogs(&mut entities, &mut configuration)
        .context("Failed to populate base catalogs")?;

    // Phase 1: build every map
    let mut registry = InitializerRegistry::new(content::maps::all())
        .context("Invalid map content")?;
    tracing::info!(initializers = registry.len(), phase = ?registry.phase(), "Registry built");
    let report = registry
        .run_initial_pass(&mut entities, &mut configuration)
        .context("Initial pass failed")?;
    ensure_valid(&configuration, ValidationStage::AfterInitialPass)?;

    let store = ConfigurationStoreBackend::from_config(&config).await?;
    let committed = store
        .commit(&configuration)
        .await
        .context("Failed to commit initial pass")?;
    if committed.is_empty() {
        anyhow::bail!("Store {} committed no maps", store.name());
    }
    tracing::info!(store = store.name(), maps = committed.len(), "Committed maps");

    // Phase 2: resolve safezones against committed identities
    registry
        .run_safezone_pass(&mut configuration, &committed)
        .context("Safezone pass failed")?;

    ensure_valid(&configuration, ValidationStage::AfterSafezonePass)?;

    store
        .commit(&configuration)
        .await
        .context("Failed to commit resolved safezones")?;
    tracing::info!(phase = ?registry.phase(), "Safezones committed");

    if let Some(path) = &config.export_path {
        // Export what the store holds, not the in-memory graph
        let stored = store
            .load_configuration()
            .await
            .context("Failed to read back the committed configuration")?;
        let mut snapshot = ConfigurationSnapshotBuilder::new(&stored);
        if !config.export_disabled_spawns {
            snapshot = snapshot.without_disabled_spawns();
        }
        snapshot.build().write_to(path)?;
        tracing::info!("Exported configuration to {}", path);
    }

    tracing::info!(
        attributes = configuration.attributes().len(),
        monsters = configuration.monsters().len(),
        base_monsters = catalogs.monsters,
        map_monsters = report.new_monsters,
        maps = report.maps,
        spawn_areas = report.spawn_areas,
        requirements = report.requirements,
        automatic_population = report.automatic_population,
        disabled_spawns = report.disabled_spawns,
        event_spawns = report.event_spawns,
        identities = entities.allocated(),
        "Seeding completed"
    );

    Ok(())
}

fn ensure_valid(configuration: &GameConfiguration, stage: ValidationStage) -> anyhow::Result<()> {
    let issues = validate_configuration(configuration, stage);
    if issues.is_empty() {
        return Ok(());
    }
    for issue in &issues {
        tracing::error!("{}", issue);
    }
    anyhow::bail!("Seeded configuration has {} issue(s) ({:?})", issues.len(), stage)
}
