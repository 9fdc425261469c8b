//! SQLite configuration store
//!
//! The database holds exactly one configuration. A commit replaces all rows in
//! a single transaction, so a second commit after the safezone pass stores the
//! resolved safezones without leaving rows of an earlier run behind.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::outbound::{CommittedMapIndex, ConfigurationStorePort};
use crate::domain::aggregates::GameConfiguration;
use crate::domain::entities::{
    AttributeDefinition, AttributeRequirement, MapDefinition, MonsterAttributeValue,
    MonsterDefinition, MonsterKind, SpawnArea,
};
use crate::domain::value_objects::{
    Direction, MapDefinitionId, MonsterReference, SpawnRegion, SpawnTrigger,
};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS attribute_definitions (
        id TEXT PRIMARY KEY,
        designation TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS monster_definitions (
        id TEXT PRIMARY KEY,
        number INTEGER NOT NULL UNIQUE,
        designation TEXT NOT NULL,
        kind TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS monster_attributes (
        monster_id TEXT NOT NULL REFERENCES monster_definitions(id),
        position INTEGER NOT NULL,
        attribute_id TEXT NOT NULL REFERENCES attribute_definitions(id),
        value REAL NOT NULL,
        PRIMARY KEY (monster_id, position)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS map_definitions (
        id TEXT PRIMARY KEY,
        number INTEGER NOT NULL UNIQUE,
        name TEXT NOT NULL,
        exp_multiplier REAL NOT NULL,
        safezone_map_id TEXT REFERENCES map_definitions(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS spawn_areas (
        id TEXT PRIMARY KEY,
        map_id TEXT NOT NULL REFERENCES map_definitions(id),
        position INTEGER NOT NULL,
        monster_id TEXT NOT NULL REFERENCES monster_definitions(id),
        monster_number INTEGER NOT NULL,
        quantity INTEGER NOT NULL,
        spawn_trigger TEXT NOT NULL,
        x_min INTEGER NOT NULL,
        x_max INTEGER NOT NULL,
        y_min INTEGER NOT NULL,
        y_max INTEGER NOT NULL,
        direction TEXT,
        spawn_delay_ms INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attribute_requirements (
        id TEXT PRIMARY KEY,
        map_id TEXT NOT NULL REFERENCES map_definitions(id),
        position INTEGER NOT NULL,
        attribute_id TEXT NOT NULL REFERENCES attribute_definitions(id),
        stat TEXT NOT NULL,
        minimum_value INTEGER NOT NULL
    )
    "#,
];

/// Tables in the order rows must be deleted
const TABLES: &[&str] = &[
    "attribute_requirements",
    "spawn_areas",
    "map_definitions",
    "monster_attributes",
    "monster_definitions",
    "attribute_definitions",
];

type SpawnRow = (
    String,
    String,
    i64,
    i64,
    String,
    i64,
    i64,
    i64,
    i64,
    Option<String>,
    Option<i64>,
);

#[derive(Clone)]
pub struct SqliteConfigurationStore {
    pool: SqlitePool,
}

impl SqliteConfigurationStore {
    /// Open (or create) the database file and make sure the schema exists
    pub async fn connect(path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create configuration database directory")?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .context("Failed to connect to SQLite configuration database")?;
        tracing::info!("Connected to SQLite configuration database: {}", path);

        Self::new(pool).await
    }

    /// A private in-memory database that lives as long as the store
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory SQLite database")?;
        Self::new(pool).await
    }

    pub async fn new(pool: SqlitePool) -> Result<Self> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .context("Failed to create configuration schema")?;
        }
        Ok(Self { pool })
    }
}

fn parse_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).with_context(|| format!("Invalid identity '{}' in database", value))
}

fn spawn_from_row(row: SpawnRow) -> Result<SpawnArea> {
    let (
        id,
        monster_id,
        monster_number,
        quantity,
        trigger,
        x_min,
        x_max,
        y_min,
        y_max,
        direction,
        delay_ms,
    ) = row;

    let trigger = SpawnTrigger::parse(&trigger)
        .with_context(|| format!("Unknown spawn trigger '{}'", trigger))?;
    let region = SpawnRegion::new(
        u8::try_from(x_min)?,
        u8::try_from(x_max)?,
        u8::try_from(y_min)?,
        u8::try_from(y_max)?,
    )?;
    let direction = direction
        .map(|d| Direction::parse(&d).with_context(|| format!("Unknown direction '{}'", d)))
        .transpose()?;

    let mut spawn = SpawnArea::in_region(
        parse_id(&id)?.into(),
        MonsterReference::new(parse_id(&monster_id)?.into(), u16::try_from(monster_number)?),
        u16::try_from(quantity)?,
        trigger,
        region,
    );
    spawn.direction = direction;
    spawn.spawn_delay = delay_ms
        .map(u64::try_from)
        .transpose()?
        .map(Duration::from_millis);
    Ok(spawn)
}

#[async_trait]
impl ConfigurationStorePort for SqliteConfigurationStore {
    #[tracing::instrument(skip_all, fields(maps = configuration.maps().len()))]
    async fn commit(&self, configuration: &GameConfiguration) -> Result<CommittedMapIndex> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to start configuration transaction")?;

        for table in TABLES {
            sqlx::query(&format!("DELETE FROM {}", table))
                .execute(&mut *tx)
                .await?;
        }

        for attribute in configuration.attributes() {
            sqlx::query("INSERT INTO attribute_definitions (id, designation, description) VALUES (?, ?, ?)")
                .bind(attribute.id.to_string())
                .bind(&attribute.designation)
                .bind(&attribute.description)
                .execute(&mut *tx)
                .await?;
        }

        for monster in configuration.monsters() {
            sqlx::query("INSERT INTO monster_definitions (id, number, designation, kind) VALUES (?, ?, ?, ?)")
                .bind(monster.id.to_string())
                .bind(i64::from(monster.number))
                .bind(&monster.designation)
                .bind(monster.kind.as_str())
                .execute(&mut *tx)
                .await?;

            for (position, value) in monster.attributes.iter().enumerate() {
                sqlx::query("INSERT INTO monster_attributes (monster_id, position, attribute_id, value) VALUES (?, ?, ?, ?)")
                    .bind(monster.id.to_string())
                    .bind(position as i64)
                    .bind(value.attribute_definition.to_string())
                    .bind(f64::from(value.value))
                    .execute(&mut *tx)
                    .await?;
            }
        }

        for map in configuration.maps() {
            // Safezones are linked once every map row exists; a target may come later in the list
            sqlx::query("INSERT INTO map_definitions (id, number, name, exp_multiplier, safezone_map_id) VALUES (?, ?, ?, ?, NULL)")
                .bind(map.id.to_string())
                .bind(i64::from(map.number))
                .bind(&map.name)
                .bind(f64::from(map.exp_multiplier))
                .execute(&mut *tx)
                .await?;

            for (position, requirement) in map.requirements.iter().enumerate() {
                sqlx::query("INSERT INTO attribute_requirements (id, map_id, position, attribute_id, stat, minimum_value) VALUES (?, ?, ?, ?, ?, ?)")
                    .bind(requirement.id.to_string())
                    .bind(map.id.to_string())
                    .bind(position as i64)
                    .bind(requirement.attribute.to_string())
                    .bind(&requirement.stat)
                    .bind(i64::from(requirement.minimum_value))
                    .execute(&mut *tx)
                    .await?;
            }

            for (position, spawn) in map.spawn_areas.iter().enumerate() {
                sqlx::query(
                    r#"
                    INSERT INTO spawn_areas (
                        id, map_id, position, monster_id, monster_number, quantity, spawn_trigger,
                        x_min, x_max, y_min, y_max, direction, spawn_delay_ms
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(spawn.id.to_string())
                .bind(map.id.to_string())
                .bind(position as i64)
                .bind(spawn.monster.id.to_string())
                .bind(i64::from(spawn.monster.number))
                .bind(i64::from(spawn.quantity))
                .bind(spawn.trigger.as_str())
                .bind(i64::from(spawn.region.x_min))
                .bind(i64::from(spawn.region.x_max))
                .bind(i64::from(spawn.region.y_min))
                .bind(i64::from(spawn.region.y_max))
                .bind(spawn.direction.map(|d| d.as_str()))
                .bind(
                    spawn
                        .spawn_delay
                        .map(|d| i64::try_from(d.as_millis()))
                        .transpose()
                        .context("Spawn delay does not fit the database column")?,
                )
                .execute(&mut *tx)
                .await?;
            }
        }

        for map in configuration.maps() {
            if let Some(safezone) = map.safezone_map {
                sqlx::query("UPDATE map_definitions SET safezone_map_id = ? WHERE id = ?")
                    .bind(safezone.to_string())
                    .bind(map.id.to_string())
                    .execute(&mut *tx)
                    .await
                    .with_context(|| format!("Failed to link safezone of map {}", map.number))?;
            }
        }

        tx.commit()
            .await
            .context("Failed to commit configuration transaction")?;
        tracing::info!(
            maps = configuration.maps().len(),
            monsters = configuration.monsters().len(),
            "Committed configuration to SQLite"
        );

        self.load_map_index().await
    }

    async fn load_map_index(&self) -> Result<CommittedMapIndex> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT number, id FROM map_definitions ORDER BY number")
                .fetch_all(&self.pool)
                .await
                .context("Failed to read committed maps")?;

        let entries = rows
            .into_iter()
            .map(|(number, id)| Ok((u8::try_from(number)?, parse_id(&id)?.into())))
            .collect::<Result<Vec<(u8, MapDefinitionId)>>>()?;
        Ok(CommittedMapIndex::from_committed(entries))
    }

    /// Read the stored configuration back into an aggregate
    async fn load_configuration(&self) -> Result<GameConfiguration> {
        let mut configuration = GameConfiguration::new();

        let attributes: Vec<(String, String, String)> = sqlx::query_as(
            "SELECT id, designation, description FROM attribute_definitions ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        for (id, designation, description) in attributes {
            configuration.add_attribute(
                AttributeDefinition::new(parse_id(&id)?.into(), designation)
                    .with_description(description),
            )?;
        }

        let monsters: Vec<(String, i64, String, String)> = sqlx::query_as(
            "SELECT id, number, designation, kind FROM monster_definitions ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        for (id, number, designation, kind) in monsters {
            let kind = MonsterKind::parse(&kind)
                .with_context(|| format!("Unknown monster kind '{}'", kind))?;
            let mut monster =
                MonsterDefinition::new(parse_id(&id)?.into(), u16::try_from(number)?, designation, kind);

            let values: Vec<(String, f64)> = sqlx::query_as(
                "SELECT attribute_id, value FROM monster_attributes WHERE monster_id = ? ORDER BY position",
            )
            .bind(&id)
            .fetch_all(&self.pool)
            .await?;
            for (attribute_id, value) in values {
                monster
                    .attributes
                    .push(MonsterAttributeValue::new(parse_id(&attribute_id)?.into(), value as f32));
            }
            configuration.add_monster(monster)?;
        }

        let maps: Vec<(String, i64, String, f64, Option<String>)> = sqlx::query_as(
            "SELECT id, number, name, exp_multiplier, safezone_map_id FROM map_definitions ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        for (id, number, name, exp_multiplier, safezone) in maps {
            let mut map = MapDefinition::new(parse_id(&id)?.into(), u8::try_from(number)?, name)
                .with_exp_multiplier(exp_multiplier as f32);
            map.safezone_map = safezone.as_deref().map(parse_id).transpose()?.map(Into::into);

            let requirements: Vec<(String, String, String, i64)> = sqlx::query_as(
                "SELECT id, attribute_id, stat, minimum_value FROM attribute_requirements WHERE map_id = ? ORDER BY position",
            )
            .bind(&id)
            .fetch_all(&self.pool)
            .await?;
            for (requirement_id, attribute_id, stat, minimum_value) in requirements {
                map.requirements.push(AttributeRequirement::new(
                    parse_id(&requirement_id)?.into(),
                    parse_id(&attribute_id)?.into(),
                    stat,
                    i32::try_from(minimum_value)?,
                ));
            }

            let spawns: Vec<SpawnRow> = sqlx::query_as(
                r#"
                SELECT id, monster_id, monster_number, quantity,
                       spawn_trigger, x_min, x_max, y_min, y_max, direction, spawn_delay_ms
                FROM spawn_areas WHERE map_id = ? ORDER BY position
                "#,
            )
            .bind(&id)
            .fetch_all(&self.pool)
            .await?;
            for row in spawns {
                map = map.with_spawn_area(spawn_from_row(row)?);
            }

            configuration.add_map(map)?;
        }

        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        AttributeDefinitionId, AttributeRequirementId, MonsterDefinitionId, SpawnAreaId,
    };

    fn sample_configuration() -> GameConfiguration {
        let mut configuration = GameConfiguration::new();
        let level = AttributeDefinition::new(AttributeDefinitionId::new(), "Level");
        let guard = MonsterDefinition::new(MonsterDefinitionId::new(), 240, "Safety Guard", MonsterKind::Guard)
            .with_attribute(level.id, 90.0);
        let reference = MonsterReference::new(guard.id, guard.number);

        let mut map = MapDefinition::new(MapDefinitionId::new(), 0, "Lorencia")
            .with_spawn_area(SpawnArea::at_point(SpawnAreaId::new(), reference, 147, 145, Direction::SouthWest))
            .with_spawn_area(
                SpawnArea::in_region(
                    SpawnAreaId::new(),
                    reference,
                    0,
                    SpawnTrigger::ManuallyInvoked,
                    SpawnRegion::new(10, 20, 30, 40).unwrap(),
                )
                .with_spawn_delay(Duration::from_millis(1500)),
            );
        map.requirements.push(AttributeRequirement::new(
            AttributeRequirementId::new(),
            level.id,
            "Level",
            10,
        ));

        configuration.add_attribute(level).unwrap();
        configuration.add_monster(guard).unwrap();
        configuration.add_map(map).unwrap();
        configuration
    }

    #[tokio::test]
    async fn test_commit_returns_committed_identities() {
        let store = SqliteConfigurationStore::in_memory().await.unwrap();
        let configuration = sample_configuration();

        let index = store.commit(&configuration).await.unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(0), Some(configuration.maps()[0].id));
    }

    #[tokio::test]
    async fn test_configuration_survives_a_round_trip() {
        let store = SqliteConfigurationStore::in_memory().await.unwrap();
        let mut configuration = sample_configuration();
        let lorencia = configuration.maps()[0].id;
        configuration.find_map_by_number_mut(0).unwrap().safezone_map = Some(lorencia);

        store.commit(&configuration).await.unwrap();
        let loaded = store.load_configuration().await.unwrap();

        let map = loaded.find_map_by_number(0).unwrap();
        assert_eq!(map.safezone_map, Some(lorencia));
        assert_eq!(map.requirements[0].minimum_value, 10);
        assert_eq!(map.spawn_areas.len(), 2);
        assert_eq!(map.spawn_areas[0].direction, Some(Direction::SouthWest));
        assert!(map.spawn_areas[0].region.is_point());
        let disabled = &map.spawn_areas[1];
        assert_eq!(disabled.quantity, 0);
        assert_eq!(disabled.trigger, SpawnTrigger::ManuallyInvoked);
        assert_eq!(disabled.spawn_delay, Some(Duration::from_millis(1500)));
        let guard = loaded.find_monster_by_number(240).unwrap();
        assert_eq!(guard.attributes[0].value, 90.0);
    }

    #[tokio::test]
    async fn test_second_commit_replaces_the_first() {
        let store = SqliteConfigurationStore::in_memory().await.unwrap();
        store.commit(&sample_configuration()).await.unwrap();

        let replacement = sample_configuration();
        let index = store.commit(&replacement).await.unwrap();

        assert_eq!(index.get(0), Some(replacement.maps()[0].id));
        assert_eq!(store.load_configuration().await.unwrap().monsters().len(), 1);
    }

    #[tokio::test]
    async fn test_safezone_may_point_at_a_later_map() {
        let store = SqliteConfigurationStore::in_memory().await.unwrap();
        let mut configuration = sample_configuration();
        let devias = MapDefinition::new(MapDefinitionId::new(), 2, "Devias");
        let devias_id = devias.id;
        configuration.add_map(devias).unwrap();
        store.commit(&configuration).await.unwrap();

        configuration.find_map_by_number_mut(0).unwrap().safezone_map = Some(devias_id);
        let index = store.commit(&configuration).await.unwrap();

        assert_eq!(index.get(2), Some(devias_id));
        let loaded = store.load_configuration().await.unwrap();
        assert_eq!(loaded.find_map_by_number(0).unwrap().safezone_map, Some(devias_id));
        assert_eq!(loaded.find_map_by_number(2).unwrap().safezone_map, None);
    }

    #[tokio::test]
    async fn test_full_seeding_run_round_trips() {
        use crate::application::services::{validate_configuration, InitializerRegistry, ValidationStage};
        use crate::content::{maps, populate_catalogs};
        use crate::infrastructure::persistence::InMemoryEntityContext;

        let store = SqliteConfigurationStore::in_memory().await.unwrap();
        let mut entities = InMemoryEntityContext::deterministic();
        let mut configuration = GameConfiguration::new();
        populate_catalogs(&mut entities, &mut configuration).unwrap();
        let mut registry = InitializerRegistry::new(maps::all()).unwrap();
        registry.run_initial_pass(&mut entities, &mut configuration).unwrap();

        let committed = store.commit(&configuration).await.unwrap();
        registry.run_safezone_pass(&mut configuration, &committed).unwrap();
        store.commit(&configuration).await.unwrap();

        let loaded = store.load_configuration().await.unwrap();
        assert!(validate_configuration(&loaded, ValidationStage::AfterSafezonePass).is_empty());
        assert_eq!(loaded.maps().len(), configuration.maps().len());
        assert_eq!(loaded.monsters().len(), configuration.monsters().len());
        for (stored, built) in loaded.maps().iter().zip(configuration.maps()) {
            assert_eq!(stored.id, built.id);
            assert_eq!(stored.safezone_map, built.safezone_map);
            assert_eq!(stored.spawn_areas.len(), built.spawn_areas.len());
            assert_eq!(stored.requirements.len(), built.requirements.len());
        }
    }
}
