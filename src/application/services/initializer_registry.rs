//! Initializer Registry - Drives all map initializers through both passes
//!
//! The seeding run is:
//! 1. `run_initial_pass` builds every map (catalogs must already be populated)
//! 2. the caller commits the configuration to a store
//! 3. `run_safezone_pass` resolves safezones against the committed identities
//!
//! Each pass is all-or-nothing: on failure the configuration is restored to
//! the state it had before the pass started.

use std::collections::HashMap;

use tracing::{error, info, instrument};

use crate::application::dto::MapSpec;
use crate::application::ports::outbound::{CommittedMapIndex, EntityContext};
use crate::application::services::{CatalogIndex, MapInitializer, SeedContext, SeedError};
use crate::domain::aggregates::GameConfiguration;
use crate::domain::value_objects::MapDefinitionId;

/// Progress of a registry through the seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryPhase {
    Built,
    Initialized,
    SafezonesResolved,
}

/// Result of the first pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialPassReport {
    pub maps: usize,
    pub spawn_areas: usize,
    pub requirements: usize,
    pub new_monsters: usize,
    /// Monsters placed by automatic spawns once the maps are loaded
    pub automatic_population: u32,
    pub disabled_spawns: usize,
    pub event_spawns: usize,
}

/// Ordered list of map initializers
///
/// List order has no meaning beyond making runs and logs deterministic.
pub struct InitializerRegistry<I: MapInitializer = MapSpec> {
    initializers: Vec<I>,
    phase: RegistryPhase,
}

impl<I: MapInitializer> InitializerRegistry<I> {
    /// Create a registry, rejecting initializers that claim the same map number
    pub fn new(initializers: Vec<I>) -> Result<Self, SeedError> {
        let mut claimed: HashMap<u8, &str> = HashMap::new();
        for initializer in &initializers {
            if let Some(first) = claimed.insert(initializer.number(), initializer.name()) {
                return Err(SeedError::DuplicateIdentity {
                    number: initializer.number(),
                    first: first.to_string(),
                    second: initializer.name().to_string(),
                });
            }
        }

        Ok(Self {
            initializers,
            phase: RegistryPhase::Built,
        })
    }

    pub fn phase(&self) -> RegistryPhase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.initializers.len()
    }

    /// Phase 1: build every map in list order
    #[instrument(skip_all, fields(maps = self.initializers.len()))]
    pub fn run_initial_pass<C: EntityContext>(
        &mut self,
        entities: &mut C,
        configuration: &mut GameConfiguration,
    ) -> Result<InitialPassReport, SeedError> {
        if self.phase != RegistryPhase::Built {
            return Err(SeedError::OrderingViolation(
                "the initial pass has already run for this registry".to_string(),
            ));
        }

        for initializer in &self.initializers {
            if let Some(existing) = configuration.find_map_by_number(initializer.number()) {
                return Err(SeedError::DuplicateIdentity {
                    number: initializer.number(),
                    first: existing.name.clone(),
                    second: initializer.name().to_string(),
                });
            }
        }

        let checkpoint = configuration.checkpoint();
        let monsters_before = configuration.monsters().len();
        let mut catalog = CatalogIndex::build(configuration);

        let result = {
            let mut ctx = SeedContext::new(entities, configuration, &mut catalog);
            self.initializers
                .iter()
                .try_for_each(|initializer| initializer.initialize(&mut ctx).map(|_| ()))
        };

        if let Err(e) = result {
            error!(error = %e, "Initial pass failed, discarding partially built maps");
            configuration.rollback(checkpoint);
            return Err(e);
        }

        self.phase = RegistryPhase::Initialized;
        let report = self.report(configuration, monsters_before);
        info!(
            maps = report.maps,
            spawn_areas = report.spawn_areas,
            requirements = report.requirements,
            new_monsters = report.new_monsters,
            "Initial pass completed"
        );
        Ok(report)
    }

    /// Phase 2: resolve every safezone against committed map identities
    ///
    /// `committed` must come from a commit made after the initial pass.
    /// Returns the number of safezones set.
    #[instrument(skip_all, fields(maps = self.initializers.len(), committed = committed.len()))]
    pub fn run_safezone_pass(
        &mut self,
        configuration: &mut GameConfiguration,
        committed: &CommittedMapIndex,
    ) -> Result<usize, SeedError> {
        match self.phase {
            RegistryPhase::Initialized => {}
            RegistryPhase::Built => {
                return Err(SeedError::OrderingViolation(
                    "the safezone pass requires a completed initial pass".to_string(),
                ))
            }
            RegistryPhase::SafezonesResolved => {
                return Err(SeedError::OrderingViolation(
                    "the safezone pass has already run for this registry".to_string(),
                ))
            }
        }

        self.ensure_committed(configuration, committed)?;

        let previous: Vec<(u8, Option<MapDefinitionId>)> = self
            .initializers
            .iter()
            .filter_map(|i| configuration.find_map_by_number(i.number()))
            .map(|m| (m.number, m.safezone_map))
            .collect();

        let result = self
            .initializers
            .iter()
            .try_for_each(|initializer| {
                initializer
                    .set_safezone_map(configuration, committed)
                    .map(|_| ())
            });

        if let Err(e) = result {
            error!(error = %e, "Safezone pass failed, restoring previous safezones");
            for (number, safezone) in previous {
                if let Some(map) = configuration.find_map_by_number_mut(number) {
                    map.safezone_map = safezone;
                }
            }
            return Err(e);
        }

        self.phase = RegistryPhase::SafezonesResolved;
        info!(resolved = self.initializers.len(), "Safezone pass completed");
        Ok(self.initializers.len())
    }

    /// Every map of this registry must have been committed with its current identity
    fn ensure_committed(
        &self,
        configuration: &GameConfiguration,
        committed: &CommittedMapIndex,
    ) -> Result<(), SeedError> {
        for initializer in &self.initializers {
            let number = initializer.number();
            let built = configuration.find_map_by_number(number).ok_or_else(|| {
                SeedError::OrderingViolation(format!("map {} is missing from the configuration", number))
            })?;
            match committed.get(number) {
                Some(id) if id == built.id => {}
                Some(id) => {
                    return Err(SeedError::OrderingViolation(format!(
                        "map {} was committed as {} but the configuration holds {}",
                        number, id, built.id
                    )))
                }
                None => {
                    return Err(SeedError::OrderingViolation(format!(
                        "map {} has not been committed",
                        number
                    )))
                }
            }
        }
        Ok(())
    }

    fn report(&self, configuration: &GameConfiguration, monsters_before: usize) -> InitialPassReport {
        let maps = self
            .initializers
            .iter()
            .filter_map(|i| configuration.find_map_by_number(i.number()));

        let mut report = InitialPassReport {
            new_monsters: configuration.monsters().len() - monsters_before,
            ..Default::default()
        };
        for map in maps {
            report.maps += 1;
            report.spawn_areas += map.spawn_areas.len();
            report.requirements += map.requirements.len();
            report.automatic_population += map.automatic_population();
            for spawn in &map.spawn_areas {
                if spawn.is_disabled() {
                    report.disabled_spawns += 1;
                }
                if spawn.trigger.is_event_bound() {
                    report.event_spawns += 1;
                }
            }
        }
        report
    }
}
