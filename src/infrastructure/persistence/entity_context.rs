//! In-memory entity context

use uuid::Uuid;

use crate::application::ports::outbound::EntityContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdentityMode {
    Random,
    Sequential,
}

/// Entity context allocating identities in process
///
/// Sequential mode numbers identities from 1 upwards, so two runs over the
/// same content allocate the same identities in the same order.
#[derive(Debug, Clone)]
pub struct InMemoryEntityContext {
    mode: IdentityMode,
    allocated: u64,
}

impl InMemoryEntityContext {
    /// Random v4 identities
    pub fn new() -> Self {
        Self {
            mode: IdentityMode::Random,
            allocated: 0,
        }
    }

    /// Sequential identities
    pub fn deterministic() -> Self {
        Self {
            mode: IdentityMode::Sequential,
            allocated: 0,
        }
    }
}

impl Default for InMemoryEntityContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityContext for InMemoryEntityContext {
    fn next_identity(&mut self) -> Uuid {
        self.allocated += 1;
        match self.mode {
            IdentityMode::Random => Uuid::new_v4(),
            IdentityMode::Sequential => Uuid::from_u128(u128::from(self.allocated)),
        }
    }

    fn allocated(&self) -> u64 {
        self.allocated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::MapDefinitionId;

    #[test]
    fn test_deterministic_contexts_agree() {
        let mut first = InMemoryEntityContext::deterministic();
        let mut second = InMemoryEntityContext::deterministic();

        let a: MapDefinitionId = first.create_new();
        let b: MapDefinitionId = second.create_new();

        assert_eq!(a, b);
        assert_ne!(first.next_identity(), Uuid::from(a));
        assert_eq!(first.allocated(), 2);
    }

    #[test]
    fn test_random_identities_are_distinct() {
        let mut context = InMemoryEntityContext::new();
        assert_ne!(context.next_identity(), context.next_identity());
    }
}
