//! Player aggregate implementation.

use common::{IdGenerator, PlayerId, Version};

use crate::aggregate::{Aggregate, DomainEvent};
use crate::error::DomainError;
use crate::history::{self, RecordedEvent};

use super::{PlayerEvent, PlayerState};

/// Player aggregate root.
///
/// Owns its projected state and the ordered record of every event applied
/// to it. Both are written only by [`Player::apply`]; callers read them
/// through [`Aggregate::state`] and [`Aggregate::events`].
#[derive(Debug, Clone)]
pub struct Player {
    state: PlayerState,
    events: Vec<PlayerEvent>,
}

impl Aggregate for Player {
    type Id = PlayerId;
    type Event = PlayerEvent;
    type State = PlayerState;

    fn aggregate_type() -> &'static str {
        "Player"
    }

    fn id(&self) -> &PlayerId {
        &self.state.id
    }

    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn events(&self) -> &[PlayerEvent] {
        &self.events
    }

    fn transition(state: &mut PlayerState, event: &PlayerEvent) {
        match event {
            PlayerEvent::Registered(data) => {
                state.id = data.player_id.clone();
                state.name = data.name.clone();
            }
            PlayerEvent::Locked(_) => {
                state.locked = true;
            }
        }
    }
}

// Factories
impl Player {
    /// Registers a new player.
    pub fn register(id: impl Into<PlayerId>, name: Option<String>) -> Self {
        let mut player = Self::empty();
        player.apply(PlayerEvent::registered(id, name));
        player
    }

    /// Registers a new player whose ID is drawn from `generator`.
    pub fn register_with<G>(generator: &G, name: Option<String>) -> Self
    where
        G: IdGenerator + ?Sized,
    {
        Self::register(generator.next_id(), name)
    }

    /// Rebuilds a player from a previously recorded history.
    ///
    /// The history must start with exactly one registration, and every
    /// later event must refer to the registered player.
    #[tracing::instrument(skip_all)]
    pub fn from_history(
        events: impl IntoIterator<Item = PlayerEvent>,
    ) -> Result<Self, DomainError> {
        let mut events = events.into_iter();
        let mut player = Self::empty();

        match events.next() {
            Some(event @ PlayerEvent::Registered(_)) => player.apply(event),
            Some(event) => {
                return Err(DomainError::invalid_history(format!(
                    "history must start with {}, found {}",
                    PlayerEvent::REGISTERED,
                    event.event_type()
                )));
            }
            None => return Err(DomainError::invalid_history("history is empty")),
        }

        for event in events {
            if event.player_id() != player.id() {
                return Err(DomainError::invalid_history(format!(
                    "{} for player {} in history of player {}",
                    event.event_type(),
                    event.player_id(),
                    player.id()
                )));
            }
            match event {
                PlayerEvent::Registered(_) => {
                    return Err(DomainError::invalid_history(format!(
                        "player {} registered twice",
                        player.id()
                    )));
                }
                PlayerEvent::Locked(_) if player.is_locked() => {
                    return Err(DomainError::invalid_history(format!(
                        "player {} locked twice",
                        player.id()
                    )));
                }
                PlayerEvent::Locked(_) => player.apply(event),
            }
        }

        metrics::counter!("player_replays_total").increment(1);
        tracing::debug!(player_id = %player.id(), version = %player.version(), "player rebuilt from history");

        Ok(player)
    }

    /// Rebuilds a player from recorded envelopes, e.g. as loaded from a store.
    ///
    /// Every payload must name the player its envelope is filed under.
    pub fn from_records(
        records: impl IntoIterator<Item = RecordedEvent>,
    ) -> Result<Self, DomainError> {
        let records: Vec<RecordedEvent> = records.into_iter().collect();
        history::validate_sequence(&records)?;

        let events = records
            .iter()
            .map(|record| {
                let event = PlayerEvent::decode(record)?;
                if event.player_id().as_str() != record.aggregate_id {
                    return Err(DomainError::invalid_history(format!(
                        "record {} of aggregate {} carries {} for player {}",
                        record.version,
                        record.aggregate_id,
                        event.event_type(),
                        event.player_id()
                    )));
                }
                Ok(event)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_history(events)
    }

    fn empty() -> Self {
        Self {
            state: PlayerState::default(),
            events: Vec::new(),
        }
    }
}

// Query methods
impl Player {
    /// Returns true once the player has been locked.
    pub fn is_locked(&self) -> bool {
        self.state.locked
    }

    /// Returns the applied events as envelopes with versions 1..=n.
    pub fn recorded_events(&self) -> Result<Vec<RecordedEvent>, DomainError> {
        let mut version = Version::initial();
        self.events
            .iter()
            .map(|event| {
                version = version.next();
                RecordedEvent::record::<Self>(self.id(), version, event)
            })
            .collect()
    }
}

// Commands
impl Player {
    /// Locks the player. Locking an already locked player does nothing.
    #[tracing::instrument(skip(self), fields(player_id = %self.id()))]
    pub fn lock(&mut self) {
        if self.state.locked {
            tracing::debug!("player already locked");
            return;
        }

        self.apply(PlayerEvent::locked(self.state.id.clone()));
    }
}

// Event dispatch
impl Player {
    /// Folds the event into the state and appends it to the record.
    fn apply(&mut self, event: PlayerEvent) {
        let event_type = event.event_type();
        Self::transition(&mut self.state, &event);
        self.events.push(event);

        metrics::counter!("player_events_applied_total", "event_type" => event_type).increment(1);
        tracing::debug!(
            player_id = %self.state.id,
            event_type,
            version = %self.version(),
            "event applied"
        );
    }
}
