//! Console front end for the player aggregate.
//!
//! Registers a player according to the configuration, locks it, and reports
//! the resulting state and event names. It then runs the canonical lock
//! scenario to check the aggregate end to end.

pub mod config;
pub mod error;

use domain::{Aggregate, DomainEvent, Player, PlayerEvent, PlayerState};
use scenario::Scenario;

pub use config::{Config, IdStrategy};
pub use error::ConsoleError;

/// Outcome of a console run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub state: PlayerState,
    pub event_types: Vec<&'static str>,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "State = {}", self.state)?;
        write!(f, "Events = {}", self.event_types.join(", "))
    }
}

/// Registers and locks a player, then runs the lock scenario.
#[tracing::instrument(skip_all, fields(id_strategy = ?config.id_strategy))]
pub fn run(config: &Config) -> Result<Report, ConsoleError> {
    let generator = config.id_generator();
    let mut player = Player::register_with(generator.as_ref(), config.player_name.clone());
    player.lock();
    tracing::info!(player_id = %player.id(), version = %player.version(), "player registered and locked");

    // Report what a reader of the recorded history would see.
    let replayed = Player::from_records(player.recorded_events()?)?;
    let report = Report {
        state: replayed.state().clone(),
        event_types: replayed.events().iter().map(|e| e.event_type()).collect(),
    };

    run_lock_scenario()?;

    Ok(report)
}

/// Registering player "1" named "jef" and locking it yields a locked state
/// and exactly the registration and lock events.
pub fn run_lock_scenario() -> Result<Player, ConsoleError> {
    let name = Some("jef".to_string());

    let player = Scenario::new()
        .given(|| Player::register("1", name.clone()))
        .when(|player| player.lock())
        .then_state(PlayerState::new("1", name.clone(), true))
        .then_event(PlayerEvent::registered("1", name.clone()))
        .then_event(PlayerEvent::locked("1"))
        .run()?;

    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_defaults() {
        let report = run(&Config::default()).unwrap();

        assert_eq!(
            report.state,
            PlayerState::new("1", Some("jef".to_string()), true)
        );
        assert_eq!(report.event_types, vec!["PlayerRegistered", "PlayerLocked"]);
    }

    #[test]
    fn test_report_display() {
        let report = run(&Config::default()).unwrap();
        assert_eq!(
            report.to_string(),
            "State = Id = 1 Name = jef Locked = true\nEvents = PlayerRegistered, PlayerLocked"
        );
    }

    #[test]
    fn test_run_with_uuid_strategy() {
        let config = Config {
            id_strategy: IdStrategy::Uuid,
            player_name: None,
            ..Config::default()
        };

        let report = run(&config).unwrap();
        assert_ne!(report.state.id().as_str(), "1");
        assert_eq!(report.state.name(), None);
        assert!(report.state.is_locked());
    }

    #[test]
    fn test_lock_scenario_holds() {
        let player = run_lock_scenario().unwrap();
        assert!(player.is_locked());
    }
}
