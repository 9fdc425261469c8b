//! Configuration export
//!
//! Serializes a seeded configuration to JSON so it can be inspected or handed
//! to tools that do not read the database.

mod configuration_snapshot;

pub use configuration_snapshot::ConfigurationSnapshotBuilder;
