//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Seeder configuration
//! - Persistence: Entity context and configuration stores (memory, SQLite)
//! - Export: JSON snapshot of the seeded configuration

pub mod config;
pub mod export;
pub mod persistence;
