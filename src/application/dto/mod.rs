//! Data Transfer Objects - Authoring data fed into the seeding services

pub mod map_spec;

pub use map_spec::*;
