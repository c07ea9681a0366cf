//! Player domain events.

use common::PlayerId;
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;
use crate::error::DomainError;
use crate::history::RecordedEvent;

use super::Player;

/// Events that can occur on a player aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PlayerEvent {
    /// Player was registered. Always the first event of a history.
    #[serde(rename = "PlayerRegistered")]
    Registered(PlayerRegisteredData),

    /// Player was locked. Occurs at most once.
    #[serde(rename = "PlayerLocked")]
    Locked(PlayerLockedData),
}

impl PlayerEvent {
    pub const REGISTERED: &'static str = "PlayerRegistered";
    pub const LOCKED: &'static str = "PlayerLocked";
}

impl DomainEvent for PlayerEvent {
    const EVENT_TYPES: &'static [&'static str] = &[Self::REGISTERED, Self::LOCKED];

    fn event_type(&self) -> &'static str {
        match self {
            PlayerEvent::Registered(_) => Self::REGISTERED,
            PlayerEvent::Locked(_) => Self::LOCKED,
        }
    }
}

/// Data for PlayerRegistered event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegisteredData {
    /// The identity established by registration.
    pub player_id: PlayerId,

    /// Optional display name.
    pub name: Option<String>,
}

/// Data for PlayerLocked event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLockedData {
    /// The player that was locked.
    pub player_id: PlayerId,
}

// Convenience constructors for events
impl PlayerEvent {
    /// Creates a PlayerRegistered event.
    pub fn registered(player_id: impl Into<PlayerId>, name: Option<String>) -> Self {
        PlayerEvent::Registered(PlayerRegisteredData {
            player_id: player_id.into(),
            name,
        })
    }

    /// Creates a PlayerLocked event.
    pub fn locked(player_id: impl Into<PlayerId>) -> Self {
        PlayerEvent::Locked(PlayerLockedData {
            player_id: player_id.into(),
        })
    }

    /// Returns the player the event refers to.
    pub fn player_id(&self) -> &PlayerId {
        match self {
            PlayerEvent::Registered(data) => &data.player_id,
            PlayerEvent::Locked(data) => &data.player_id,
        }
    }

    /// Decodes a recorded event of the player aggregate.
    pub fn decode(record: &RecordedEvent) -> Result<Self, DomainError> {
        record.decode::<Player>()
    }
}
