//! Aggregates - Consistency boundaries for the configuration graph

mod game_configuration;

pub use game_configuration::{AggregateError, GameConfiguration};
