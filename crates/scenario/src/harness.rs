//! The given/when/then builder.

use std::fmt::Debug;

use domain::Aggregate;

use crate::error::{Discriminant, ScenarioError, Step};

type Factory<'a, A> = Box<dyn FnOnce() -> A + 'a>;
type Action<'a, A> = Box<dyn FnOnce(&mut A) + 'a>;

/// A given/when/then scenario over an aggregate.
///
/// `given` and `when` are required. The expected state is only checked when
/// `then_state` was called; the event record is always compared against the
/// sequence built by `then_event`, so a scenario without any `then_event`
/// expects no events at all.
pub struct Scenario<'a, A: Aggregate> {
    factory: Option<Factory<'a, A>>,
    action: Option<Action<'a, A>>,
    expected_state: Option<A::State>,
    expected_events: Vec<A::Event>,
}

impl<'a, A: Aggregate> Scenario<'a, A> {
    pub fn new() -> Self {
        Self {
            factory: None,
            action: None,
            expected_state: None,
            expected_events: Vec::new(),
        }
    }

    /// Sets the constructor of the aggregate under test.
    pub fn given(mut self, factory: impl FnOnce() -> A + 'a) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Sets the action executed against the constructed aggregate.
    pub fn when(mut self, action: impl FnOnce(&mut A) + 'a) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Sets the expected resulting state. The last call wins.
    pub fn then_state(mut self, expected: A::State) -> Self {
        self.expected_state = Some(expected);
        self
    }

    /// Appends one event to the expected event sequence.
    pub fn then_event(mut self, expected: A::Event) -> Self {
        self.expected_events.push(expected);
        self
    }

    /// Appends several events to the expected event sequence, in order.
    pub fn then_events(mut self, expected: impl IntoIterator<Item = A::Event>) -> Self {
        self.expected_events.extend(expected);
        self
    }

    /// Runs the scenario and returns the aggregate when every expectation holds.
    ///
    /// State is compared before events, so a scenario wrong on both counts
    /// reports the state mismatch.
    #[tracing::instrument(skip_all, fields(aggregate_type = A::aggregate_type()))]
    pub fn run(self) -> Result<A, ScenarioError> {
        let factory = self.factory.ok_or(ScenarioError::MissingStep(Step::Given))?;
        let action = self.action.ok_or(ScenarioError::MissingStep(Step::When))?;

        let mut sut = factory();
        action(&mut sut);

        if let Some(expected) = &self.expected_state {
            check(Discriminant::State, expected, sut.state())?;
        }
        check(
            Discriminant::Events,
            self.expected_events.as_slice(),
            sut.events(),
        )?;

        tracing::info!(events = sut.events().len(), "scenario passed");
        Ok(sut)
    }
}

impl<A: Aggregate> Default for Scenario<'_, A> {
    fn default() -> Self {
        Self::new()
    }
}

fn check<T>(discriminant: Discriminant, expected: &T, actual: &T) -> Result<(), ScenarioError>
where
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        return Ok(());
    }

    tracing::warn!(%discriminant, ?expected, ?actual, "scenario assertion failed");
    Err(ScenarioError::AssertionFailed {
        discriminant,
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Player, PlayerEvent, PlayerState};

    fn jef() -> Player {
        Player::register("1", Some("jef".to_string()))
    }

    #[test]
    fn test_missing_given() {
        let result = Scenario::<Player>::new().when(|p| p.lock()).run();
        assert!(matches!(result, Err(ScenarioError::MissingStep(Step::Given))));
    }

    #[test]
    fn test_missing_when() {
        let result = Scenario::new().given(jef).run();
        assert!(matches!(result, Err(ScenarioError::MissingStep(Step::When))));
    }

    #[test]
    fn test_last_then_state_wins() {
        let result = Scenario::new()
            .given(jef)
            .when(|p| p.lock())
            .then_state(PlayerState::new("1", None, false))
            .then_state(PlayerState::new("1", Some("jef".to_string()), true))
            .then_events([
                PlayerEvent::registered("1", Some("jef".to_string())),
                PlayerEvent::locked("1"),
            ])
            .run();
        assert!(result.is_ok());
    }

    #[test]
    fn test_state_checked_before_events() {
        let err = Scenario::new()
            .given(jef)
            .when(|p| p.lock())
            .then_state(PlayerState::default())
            .run()
            .unwrap_err();
        assert_eq!(err.discriminant(), Some(Discriminant::State));
    }

    #[test]
    fn test_no_expected_events_means_none() {
        let err = Scenario::new()
            .given(jef)
            .when(|_| {})
            .run()
            .unwrap_err();
        assert_eq!(err.discriminant(), Some(Discriminant::Events));
    }

    #[test]
    fn test_check_renders_both_sides() {
        let err = check(Discriminant::State, &1, &2).unwrap_err();
        match err {
            ScenarioError::AssertionFailed {
                expected, actual, ..
            } => {
                assert_eq!(expected, "1");
                assert_eq!(actual, "2");
            }
            other => panic!("Expected AssertionFailed, got {other:?}"),
        }
    }
}
