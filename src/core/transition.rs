//! Transition values.

use super::guard::Guard;
use super::state::{State, Trigger};

/// An allowed `(source, trigger) -> destination` mapping.
///
/// Transitions are immutable once built. Equality compares the source,
/// trigger and destination; the guard is not part of a transition's
/// identity.
///
/// # Example
///
/// ```rust
/// use lockstep::core::Transition;
///
/// let t = Transition::new("Created", "Assign", "Assigned");
/// assert_eq!(t.source(), &"Created");
/// assert_eq!(t.trigger(), &"Assign");
/// assert_eq!(t.destination(), &"Assigned");
/// assert!(t.is_enabled());
/// ```
#[derive(Clone, Debug)]
pub struct Transition<S: State, T: Trigger> {
    source: S,
    trigger: T,
    destination: S,
    guard: Option<Guard>,
}

impl<S: State, T: Trigger> Transition<S, T> {
    /// Create an unguarded transition.
    pub fn new(source: S, trigger: T, destination: S) -> Self {
        Self {
            source,
            trigger,
            destination,
            guard: None,
        }
    }

    /// Create a transition that is only enabled while `guard` holds.
    pub fn guarded(source: S, trigger: T, destination: S, guard: Guard) -> Self {
        Self {
            source,
            trigger,
            destination,
            guard: Some(guard),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn destination(&self) -> &S {
        &self.destination
    }

    pub fn guard(&self) -> Option<&Guard> {
        self.guard.as_ref()
    }

    /// Check if this transition starts at `state` and fires on `trigger` (pure).
    pub fn matches(&self, state: &S, trigger: &T) -> bool {
        self.source == *state && self.trigger == *trigger
    }

    /// Check the guard, if any.
    pub fn is_enabled(&self) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check())
    }

    /// Split into `(source, trigger, destination)`, dropping the guard.
    pub fn into_parts(self) -> (S, T, S) {
        (self.source, self.trigger, self.destination)
    }
}

impl<S: State, T: Trigger> PartialEq for Transition<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.trigger == other.trigger
            && self.destination == other.destination
    }
}

impl<S: State, T: Trigger> From<(S, T, S)> for Transition<S, T> {
    fn from((source, trigger, destination): (S, T, S)) -> Self {
        Transition::new(source, trigger, destination)
    }
}
