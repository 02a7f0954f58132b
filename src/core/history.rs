//! Audit trail of fired triggers.
//!
//! Histories are immutable: recording returns a new history and leaves the
//! original untouched, so they fit inside the immutable workflow records.

use super::state::{State, Trigger};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one accepted trigger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, T> {
    /// The state being transitioned from
    pub from: S,
    /// The trigger that was fired
    pub trigger: T,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State, T: Trigger> StateTransition<S, T> {
    /// Record stamped with the current time.
    pub fn now(from: S, trigger: T, to: S) -> Self {
        Self {
            from,
            trigger,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of accepted triggers.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now("Created", "Assign", "Assigned"))
///     .record(StateTransition::now("Assigned", "Resolve", "Resolved"));
///
/// assert_eq!(history.get_path(), vec![&"Created", &"Assigned", &"Resolved"]);
/// assert_eq!(history.triggers(), vec![&"Assign", &"Resolve"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHistory<S, T> {
    transitions: Vec<StateTransition<S, T>>,
}

impl<S: State, T: Trigger> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> StateHistory<S, T> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S, T>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Triggers fired, in order.
    pub fn triggers(&self) -> Vec<&T> {
        self.transitions.iter().map(|t| &t.trigger).collect()
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S, T>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
