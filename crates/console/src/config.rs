//! Application configuration loaded from environment variables.

use std::str::FromStr;

use common::{ExplicitId, IdGenerator, UuidGenerator};

use crate::error::ConsoleError;

/// How the registered player's identifier is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// Use `PLAYER_ID` verbatim.
    Explicit,
    /// Generate a random UUID.
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explicit" => Ok(IdStrategy::Explicit),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(ConsoleError::Config(format!(
                "unknown PLAYER_ID_STRATEGY `{other}` (expected `explicit` or `uuid`)"
            ))),
        }
    }
}

/// Console configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `PLAYER_ID` — explicit player id (default: `"1"`)
/// - `PLAYER_NAME` — display name, empty for none (default: `"jef"`)
/// - `PLAYER_ID_STRATEGY` — `explicit` or `uuid` (default: `explicit`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub player_id: String,
    pub player_name: Option<String>,
    pub id_strategy: IdStrategy,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConsoleError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConsoleError> {
        let defaults = Self::default();

        let id_strategy = match lookup("PLAYER_ID_STRATEGY") {
            Some(value) => value.parse()?,
            None => defaults.id_strategy,
        };

        let player_name = match lookup("PLAYER_NAME") {
            Some(name) if name.is_empty() => None,
            Some(name) => Some(name),
            None => defaults.player_name,
        };

        Ok(Self {
            player_id: lookup("PLAYER_ID").unwrap_or(defaults.player_id),
            player_name,
            id_strategy,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }

    /// Returns the identifier generator selected by the configuration.
    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Explicit => Box::new(ExplicitId::new(self.player_id.as_str())),
            IdStrategy::Uuid => Box::new(UuidGenerator),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_id: "1".to_string(),
            player_name: Some("jef".to_string()),
            id_strategy: IdStrategy::Explicit,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.player_id, "1");
        assert_eq!(config.player_name.as_deref(), Some("jef"));
        assert_eq!(config.id_strategy, IdStrategy::Explicit);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.player_id, "1");
        assert_eq!(config.player_name.as_deref(), Some("jef"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PLAYER_ID", "p-7"),
            ("PLAYER_NAME", "ann"),
            ("PLAYER_ID_STRATEGY", "UUID"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.player_id, "p-7");
        assert_eq!(config.player_name.as_deref(), Some("ann"));
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_name_means_no_name() {
        let config = Config::from_lookup(lookup_from(&[("PLAYER_NAME", "")])).unwrap();
        assert_eq!(config.player_name, None);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("PLAYER_ID_STRATEGY", "random")]));
        assert!(matches!(result, Err(ConsoleError::Config(_))));
    }

    #[test]
    fn test_explicit_generator_uses_player_id() {
        let config = Config {
            player_id: "abc".to_string(),
            ..Config::default()
        };
        assert_eq!(config.id_generator().next_id().as_str(), "abc");
    }
}
