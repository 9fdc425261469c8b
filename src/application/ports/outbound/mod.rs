//! Outbound ports - Interfaces that the application requires from external systems

mod configuration_store_port;
mod entity_context_port;

pub use configuration_store_port::{CommittedMapIndex, ConfigurationStorePort};
pub use entity_context_port::EntityContext;
