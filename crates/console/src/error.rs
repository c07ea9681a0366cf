//! Console error types.

use domain::DomainError;
use scenario::ScenarioError;
use thiserror::Error;

/// Errors that end a console run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Domain logic error.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// The built-in scenario did not hold.
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),
}
