//! Builder for constructing state machines.

use crate::core::{DefinitionError, Guard, State, StateMachine, Transition, Trigger};

/// Fluent accumulator of transitions grouped under a selected source state.
///
/// `allow` always declares a transition out of the currently selected state;
/// `for_state` moves the selection without discarding anything declared so
/// far. `build` runs the same validation as [`StateMachine::new`].
pub struct StateMachineBuilder<S: State, T: Trigger> {
    anchor: S,
    transitions: Vec<Transition<S, T>>,
}

impl<S: State, T: Trigger> StateMachineBuilder<S, T> {
    /// Begin a definition anchored at `state`.
    pub fn start_at(state: S) -> Self {
        Self {
            anchor: state,
            transitions: Vec::new(),
        }
    }

    /// Select a different source state for subsequent `allow` calls.
    pub fn for_state(mut self, state: S) -> Self {
        self.anchor = state;
        self
    }

    /// Allow `trigger` to move the selected state to `destination`.
    pub fn allow(mut self, trigger: T, destination: S) -> Self {
        self.transitions
            .push(Transition::new(self.anchor.clone(), trigger, destination));
        self
    }

    /// Like [`allow`](Self::allow), but only while `predicate` holds.
    pub fn allow_if<F>(mut self, trigger: T, destination: S, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.transitions.push(Transition::guarded(
            self.anchor.clone(),
            trigger,
            destination,
            Guard::new(predicate),
        ));
        self
    }

    /// The currently selected source state.
    pub fn current_state(&self) -> &S {
        &self.anchor
    }

    /// Transitions declared so far.
    pub fn transitions(&self) -> &[Transition<S, T>] {
        &self.transitions
    }

    /// Build the state machine.
    /// Returns an error if two `allow` calls share a source state and trigger.
    pub fn build(self) -> Result<StateMachine<S, T>, DefinitionError> {
        StateMachine::new(self.transitions)
    }
}
