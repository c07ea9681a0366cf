//! Identifier generation strategies.
//!
//! Aggregate factories take an [`IdGenerator`] instead of generating IDs
//! themselves, which keeps construction deterministic under test.

use crate::PlayerId;

/// Source of player identifiers.
pub trait IdGenerator {
    /// Returns the identifier for the next registered player.
    fn next_id(&self) -> PlayerId;
}

/// Always yields the same caller-chosen identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitId(PlayerId);

impl ExplicitId {
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self(id.into())
    }
}

impl IdGenerator for ExplicitId {
    fn next_id(&self) -> PlayerId {
        self.0.clone()
    }
}

/// Yields a fresh random v4 UUID on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> PlayerId {
        PlayerId::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_id_repeats_configured_value() {
        let generator = ExplicitId::new("1");
        assert_eq!(generator.next_id(), PlayerId::new("1"));
        assert_eq!(generator.next_id(), PlayerId::new("1"));
    }

    #[test]
    fn uuid_generator_yields_distinct_ids() {
        let generator = UuidGenerator;
        assert_ne!(generator.next_id(), generator.next_id());
    }

    #[test]
    fn generators_work_through_trait_objects() {
        let generators: Vec<Box<dyn IdGenerator>> =
            vec![Box::new(ExplicitId::new("a")), Box::new(UuidGenerator)];
        let ids: Vec<PlayerId> = generators.iter().map(|g| g.next_id()).collect();
        assert_eq!(ids[0].as_str(), "a");
        assert!(!ids[1].is_empty());
    }
}
