//! Player projected state.

use common::PlayerId;

/// The state of a player, projected from its event history.
///
/// `Default` is the empty state an aggregate starts from before its
/// registration event is folded in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerState {
    pub(super) id: PlayerId,
    pub(super) name: Option<String>,
    pub(super) locked: bool,
}

impl PlayerState {
    /// Builds a state value, e.g. as the expectation of a scenario.
    ///
    /// This does not touch any aggregate; a player's own state is only
    /// ever produced by folding its events.
    pub fn new(id: impl Into<PlayerId>, name: Option<String>, locked: bool) -> Self {
        Self {
            id: id.into(),
            name,
            locked,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Id = {} Name = {} Locked = {}",
            self.id,
            self.name.as_deref().unwrap_or("-"),
            self.locked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_empty() {
        let state = PlayerState::default();
        assert!(state.id().is_empty());
        assert_eq!(state.name(), None);
        assert!(!state.is_locked());
    }

    #[test]
    fn test_structural_equality() {
        let state = PlayerState::new("1", Some("jef".to_string()), true);
        assert_eq!(state, PlayerState::new("1", Some("jef".to_string()), true));
        assert_ne!(state, PlayerState::new("1", Some("jef".to_string()), false));
        assert_ne!(state, PlayerState::new("2", Some("jef".to_string()), true));
        assert_ne!(state, PlayerState::new("1", None, true));
    }

    #[test]
    fn test_display() {
        let state = PlayerState::new("1", Some("jef".to_string()), true);
        assert_eq!(state.to_string(), "Id = 1 Name = jef Locked = true");

        let state = PlayerState::new("2", None, false);
        assert_eq!(state.to_string(), "Id = 2 Name = - Locked = false");
    }
}
