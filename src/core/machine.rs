//! The validated, immutable state machine engine.

use super::error::{AmbiguousGroup, DefinitionError};
use super::state::{State, Trigger};
use super::transition::Transition;
use crate::builder::StateMachineBuilder;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, error, trace, warn};

/// Immutable, deterministic set of transitions.
///
/// Construction validates that no two transitions share a `(source, trigger)`
/// key; every query afterwards is a pure read. Transitions keep their
/// declaration order, which is the order of `allowed_triggers` and of the
/// diagram export.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{StateMachine, Transition};
///
/// let machine = StateMachine::new(vec![
///     Transition::new("Created", "Assign", "Assigned"),
///     Transition::new("Created", "Terminate", "Terminated"),
///     Transition::new("Assigned", "Resolve", "Resolved"),
/// ])
/// .unwrap();
///
/// let allowed: Vec<_> = machine.allowed_triggers(&"Created").collect();
/// assert_eq!(allowed, vec![&"Assign", &"Terminate"]);
///
/// let t = machine.get_transition(&"Assigned", &"Resolve").unwrap();
/// assert_eq!(t.destination(), &"Resolved");
/// assert!(machine.get_transition(&"Resolved", &"Assign").is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateMachine<S: State, T: Trigger> {
    transitions: Vec<Transition<S, T>>,
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Validate and store a transition set.
    ///
    /// Fails with [`DefinitionError::Ambiguous`] naming every `(source,
    /// trigger)` key that was declared more than once. A single ambiguous key
    /// is enough to reject the definition.
    pub fn new<I>(transitions: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = Transition<S, T>>,
    {
        let transitions: Vec<_> = transitions.into_iter().collect();

        match check_determinism(&transitions) {
            Validation::Success(()) => {
                debug!(transitions = transitions.len(), "state machine defined");
                Ok(Self { transitions })
            }
            Validation::Failure(groups) => {
                let groups: Vec<AmbiguousGroup> = groups.iter().cloned().collect();
                warn!(
                    ambiguous = groups.len(),
                    "rejected state machine definition"
                );
                Err(DefinitionError::Ambiguous { groups })
            }
        }
    }

    /// Start a fluent definition anchored at `state`.
    pub fn builder(state: S) -> StateMachineBuilder<S, T> {
        StateMachineBuilder::start_at(state)
    }

    /// All transitions in declaration order.
    pub fn transitions(&self) -> &[Transition<S, T>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Triggers that currently fire from `state`, in declaration order.
    ///
    /// Recomputed on every call. Transitions whose guard is not satisfied are
    /// skipped, so every yielded trigger has a `get_transition` match.
    pub fn allowed_triggers<'a>(&'a self, state: &'a S) -> impl Iterator<Item = &'a T> + 'a {
        self.transitions
            .iter()
            .filter(move |t| t.source() == state && t.is_enabled())
            .map(Transition::trigger)
    }

    /// The transition firing for `(state, trigger)`, if any.
    ///
    /// Returns `None` when nothing matches or the matching transition's guard
    /// is not satisfied; refusing a trigger is up to the caller.
    ///
    /// # Panics
    ///
    /// Panics if more than one transition matches. Validation at construction
    /// makes this unreachable; reaching it means the determinism check is
    /// broken.
    pub fn get_transition(&self, state: &S, trigger: &T) -> Option<&Transition<S, T>> {
        let mut matching = self.transitions.iter().filter(|t| t.matches(state, trigger));
        let Some(found) = matching.next() else {
            trace!(?state, ?trigger, "no transition");
            return None;
        };

        if let Some(other) = matching.next() {
            error!(?state, ?trigger, "determinism invariant violated");
            panic!(
                "state machine holds more than one transition for ({:?}, {:?}): {:?} and {:?}",
                state, trigger, found, other
            );
        }

        if found.is_enabled() {
            trace!(?state, ?trigger, destination = ?found.destination(), "transition found");
            Some(found)
        } else {
            trace!(?state, ?trigger, "transition blocked by guard");
            None
        }
    }

    /// Destination reached by firing `trigger` from `state`.
    pub fn fire(&self, state: &S, trigger: &T) -> Option<&S> {
        self.get_transition(state, trigger)
            .map(Transition::destination)
    }

    pub fn can_fire(&self, state: &S, trigger: &T) -> bool {
        self.get_transition(state, trigger).is_some()
    }

    /// Distinct source states, in first-declared order.
    pub fn source_states(&self) -> Vec<&S> {
        let mut states: Vec<&S> = Vec::new();
        for t in &self.transitions {
            if !states.contains(&t.source()) {
                states.push(t.source());
            }
        }
        states
    }

    /// Distinct triggers, in first-declared order.
    pub fn triggers(&self) -> Vec<&T> {
        let mut triggers: Vec<&T> = Vec::new();
        for t in &self.transitions {
            if !triggers.contains(&t.trigger()) {
                triggers.push(t.trigger());
            }
        }
        triggers
    }
}

/// Group transitions by `(source, trigger)` and flag every group with more
/// than one member. All offending groups are reported, not just the first.
fn check_determinism<S: State, T: Trigger>(
    transitions: &[Transition<S, T>],
) -> Validation<(), NonEmptyVec<AmbiguousGroup>> {
    struct Group<'a, S, T> {
        source: &'a S,
        trigger: &'a T,
        destinations: Vec<&'a S>,
    }

    let mut groups: Vec<Group<'_, S, T>> = Vec::new();
    for t in transitions {
        match groups
            .iter_mut()
            .find(|g| g.source == t.source() && g.trigger == t.trigger())
        {
            Some(group) => group.destinations.push(t.destination()),
            None => groups.push(Group {
                source: t.source(),
                trigger: t.trigger(),
                destinations: vec![t.destination()],
            }),
        }
    }

    let checks: Vec<Validation<(), NonEmptyVec<AmbiguousGroup>>> = groups
        .into_iter()
        .map(|g| {
            if g.destinations.len() > 1 {
                Validation::fail(AmbiguousGroup {
                    source: format!("{:?}", g.source),
                    trigger: format!("{:?}", g.trigger),
                    destinations: g.destinations.iter().map(|d| format!("{:?}", d)).collect(),
                })
            } else {
                Validation::success(())
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
