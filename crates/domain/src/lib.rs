//! Domain layer for the player event-sourcing system.
//!
//! This crate provides the core domain abstractions including:
//! - Aggregate trait for event-sourced entities
//! - DomainEvent trait for domain events
//! - RecordedEvent envelopes for replaying a previously recorded history
//! - Player aggregate implementation

pub mod aggregate;
pub mod error;
pub mod history;
pub mod player;

pub use aggregate::{Aggregate, DomainEvent};
pub use error::DomainError;
pub use history::RecordedEvent;
pub use player::{Player, PlayerEvent, PlayerLockedData, PlayerRegisteredData, PlayerState};
