//! Given/when/then scenario harness for event-sourced aggregates.
//!
//! A [`Scenario`] constructs an aggregate, executes one action against it
//! and compares the resulting state and event record with expectations:
//!
//! ```
//! use domain::{Player, PlayerEvent, PlayerState};
//! use scenario::Scenario;
//!
//! Scenario::new()
//!     .given(|| Player::register("1", Some("jef".to_string())))
//!     .when(|player| player.lock())
//!     .then_state(PlayerState::new("1", Some("jef".to_string()), true))
//!     .then_event(PlayerEvent::registered("1", Some("jef".to_string())))
//!     .then_event(PlayerEvent::locked("1"))
//!     .run()
//!     .unwrap();
//! ```

pub mod error;
pub mod harness;

pub use error::{Discriminant, ScenarioError, Step};
pub use harness::Scenario;
