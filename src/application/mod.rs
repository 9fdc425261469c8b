//! Application layer - Seeding use cases over the configuration graph
//!
//! This layer contains:
//! - DTOs: static map authoring data
//! - Ports: entity identity allocation and configuration persistence
//! - Services: spawn and requirement builders, map initializers, the
//!   initializer registry and safezone resolution

pub mod dto;
pub mod ports;
pub mod services;
