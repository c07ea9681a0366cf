//! Shared identifier types for the player event-sourcing workspace.

pub mod id;
pub mod types;

pub use id::{ExplicitId, IdGenerator, UuidGenerator};
pub use types::{PlayerId, Version};
