//! Player aggregate and related types.

mod aggregate;
mod events;
mod state;

pub use aggregate::Player;
pub use events::{PlayerEvent, PlayerLockedData, PlayerRegisteredData};
pub use state::PlayerState;
