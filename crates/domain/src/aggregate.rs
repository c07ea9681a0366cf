//! Core aggregate and domain event traits.

use std::fmt::{Debug, Display};

use common::Version;
use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone + Debug + PartialEq {
    /// Every event type name this event enum can carry.
    ///
    /// Recorded events whose type is not listed here are rejected during
    /// replay instead of being skipped.
    const EVENT_TYPES: &'static [&'static str];

    /// Returns the event type name.
    ///
    /// This is used for serialization and for labelling recorded events.
    fn event_type(&self) -> &'static str;
}

/// Trait for aggregates in an event-sourced system.
///
/// An aggregate never stores its state directly. It owns an append-only
/// record of the events applied to it and a projection computed by folding
/// those events, in order, with [`Aggregate::transition`].
///
/// In event sourcing, aggregates:
/// - Are rebuilt by replaying events
/// - Generate events from commands
/// - Apply events to update state (pure, deterministic)
pub trait Aggregate: Sized {
    /// The identifier type of the aggregate.
    ///
    /// Recorded events carry the identifier in its `Display` form.
    type Id: Clone + PartialEq + Debug + Display;

    /// The type of events this aggregate produces and consumes.
    type Event: DomainEvent;

    /// The projected state derived from the event record.
    type State: Default + Clone + PartialEq + Debug;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's identifier.
    fn id(&self) -> &Self::Id;

    /// Returns a read-only view of the current projected state.
    fn state(&self) -> &Self::State;

    /// Returns every event applied since construction, in application order.
    fn events(&self) -> &[Self::Event];

    /// Folds a single event into the state.
    ///
    /// This must be pure and deterministic, and must not fail: events
    /// represent facts that have already happened. Implementations match
    /// exhaustively on the event enum so a new variant cannot be added
    /// without a transition rule.
    fn transition(state: &mut Self::State, event: &Self::Event);

    /// Returns the current version, i.e. the number of applied events.
    fn version(&self) -> Version {
        Version::new(self.events().len() as u64)
    }

    /// Computes the state a history projects to, starting from the default.
    fn project<'a>(events: impl IntoIterator<Item = &'a Self::Event>) -> Self::State
    where
        Self::Event: 'a,
    {
        events
            .into_iter()
            .fold(Self::State::default(), |mut state, event| {
                Self::transition(&mut state, event);
                state
            })
    }
}
