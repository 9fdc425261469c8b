//! Entity context port - Identity allocation for new configuration entities

use uuid::Uuid;

/// Allocates context-managed identities for new entities
///
/// Entities are plain values; the context only decides their identity. They
/// become persistable once added to the [`GameConfiguration`] aggregate.
///
/// [`GameConfiguration`]: crate::domain::aggregates::GameConfiguration
pub trait EntityContext {
    /// Allocate the next identity
    fn next_identity(&mut self) -> Uuid;

    /// Number of identities allocated so far
    fn allocated(&self) -> u64;

    /// Allocate a typed identity for a new entity
    ///
    /// ```ignore
    /// let id: MapDefinitionId = context.create_new();
    /// ```
    fn create_new<I: From<Uuid>>(&mut self) -> I {
        I::from(self.next_identity())
    }
}
