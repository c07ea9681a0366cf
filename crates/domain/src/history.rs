//! Recorded event envelopes.
//!
//! A [`RecordedEvent`] is an event as an external store would hand it back:
//! a type label and a JSON payload, plus the identity and position of the
//! aggregate it belongs to. Decoding is the point where externally supplied
//! data meets the closed event enum, so unknown kinds are surfaced as
//! [`DomainError::UnhandledEventKind`].

use common::Version;
use serde::{Deserialize, Serialize};

use crate::aggregate::{Aggregate, DomainEvent};
use crate::error::DomainError;

/// An event envelope containing an event along with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// The aggregate this event belongs to, in its `Display` form.
    pub aggregate_id: String,

    /// The type of the aggregate (e.g., "Player").
    pub aggregate_type: String,

    /// Position of the event in the aggregate's history, starting at 1.
    pub version: Version,

    /// The type of the event (e.g., "PlayerRegistered").
    pub event_type: String,

    /// The serialized event.
    pub payload: serde_json::Value,
}

impl RecordedEvent {
    /// Records a domain event of aggregate `A` at the given version.
    pub fn record<A: Aggregate>(
        aggregate_id: &A::Id,
        version: Version,
        event: &A::Event,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            aggregate_id: aggregate_id.to_string(),
            aggregate_type: A::aggregate_type().to_string(),
            version,
            event_type: event.event_type().to_string(),
            payload: serde_json::to_value(event)?,
        })
    }

    /// Decodes the payload into an event of aggregate `A`.
    ///
    /// Fails with `UnhandledEventKind` when the record belongs to another
    /// aggregate type or names an event type `A` has no transition rule for.
    pub fn decode<A: Aggregate>(&self) -> Result<A::Event, DomainError> {
        if self.aggregate_type != A::aggregate_type()
            || !<A::Event as DomainEvent>::EVENT_TYPES.contains(&self.event_type.as_str())
        {
            return Err(DomainError::UnhandledEventKind {
                aggregate_type: self.aggregate_type.clone(),
                event_type: self.event_type.clone(),
            });
        }

        let event: A::Event = serde_json::from_value(self.payload.clone())?;
        if event.event_type() != self.event_type {
            return Err(DomainError::invalid_history(format!(
                "record {} is labelled {} but carries {}",
                self.version,
                self.event_type,
                event.event_type()
            )));
        }

        Ok(event)
    }
}

/// Checks that records form one aggregate's gap-free history from version 1.
pub(crate) fn validate_sequence(records: &[RecordedEvent]) -> Result<(), DomainError> {
    let Some(first) = records.first() else {
        return Err(DomainError::invalid_history("history is empty"));
    };

    let mut expected = Version::first();
    for record in records {
        if record.aggregate_id != first.aggregate_id {
            return Err(DomainError::invalid_history(format!(
                "record {} belongs to {} instead of {}",
                record.version, record.aggregate_id, first.aggregate_id
            )));
        }
        if record.version != expected {
            return Err(DomainError::invalid_history(format!(
                "expected version {expected}, found {}",
                record.version
            )));
        }
        expected = expected.next();
    }

    Ok(())
}
