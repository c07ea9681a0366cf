//! Scenario error types.

use thiserror::Error;

/// Which assertion of a scenario failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discriminant {
    State,
    Events,
}

impl std::fmt::Display for Discriminant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discriminant::State => write!(f, "State"),
            Discriminant::Events => write!(f, "Events"),
        }
    }
}

/// A scenario step that must be provided before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Given,
    When,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Given => write!(f, "given"),
            Step::When => write!(f, "when"),
        }
    }
}

/// Errors reported by [`Scenario::run`](crate::Scenario::run).
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A required step was never provided.
    #[error("Scenario is missing its `{0}` step")]
    MissingStep(Step),

    /// The actual outcome differs from the expected one.
    #[error("{discriminant} assertion failed: expected {expected}, actual {actual}")]
    AssertionFailed {
        discriminant: Discriminant,
        expected: String,
        actual: String,
    },
}

impl ScenarioError {
    /// Returns the failed assertion, if this is an assertion failure.
    pub fn discriminant(&self) -> Option<Discriminant> {
        match self {
            ScenarioError::AssertionFailed { discriminant, .. } => Some(*discriminant),
            ScenarioError::MissingStep(_) => None,
        }
    }
}
