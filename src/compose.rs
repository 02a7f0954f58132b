//! Lock-step composition of two machines sharing a trigger alphabet.
//!
//! The product machine is an equi-join of both transition lists on the
//! trigger: every pair `(t1, t2)` with `t1.trigger == t2.trigger` yields
//!
//! ```text
//! (t1.source, t2.source) --trigger--> (t1.destination, t2.destination)
//! ```
//!
//! Triggers known to only one of the inputs never fire on the product. Rows
//! are emitted in left-major order (each left transition, then every
//! matching right transition in declaration order), and the result goes
//! through the usual determinism validation.

use crate::core::{DefinitionError, Guard, Pair, State, StateMachine, Transition, Trigger};
use tracing::debug;

/// Compose `left` and `right` into a machine over paired states.
///
/// # Example
///
/// ```rust
/// use lockstep::compose::compose;
/// use lockstep::core::{Pair, StateMachine, Transition};
///
/// let issue = StateMachine::new(vec![
///     Transition::new("Created", "Assign", "Assigned"),
///     Transition::new("Assigned", "Resolve", "Resolved"),
/// ])
/// .unwrap();
/// let project = StateMachine::new(vec![
///     Transition::new("InPlanning", "Assign", "InPlanning"),
///     Transition::new("InExecution", "Resolve", "InExecution"),
/// ])
/// .unwrap();
///
/// let both = compose(&issue, &project).unwrap();
/// assert_eq!(
///     both.fire(&Pair("Created", "InPlanning"), &"Assign"),
///     Some(&Pair("Assigned", "InPlanning"))
/// );
/// assert!(both.fire(&Pair("Created", "InExecution"), &"Assign").is_none());
/// ```
pub fn compose<S1, S2, T>(
    left: &StateMachine<S1, T>,
    right: &StateMachine<S2, T>,
) -> Result<StateMachine<Pair<S1, S2>, T>, DefinitionError>
where
    S1: State,
    S2: State,
    T: Trigger,
{
    let joined: Vec<Transition<Pair<S1, S2>, T>> = left
        .transitions()
        .iter()
        .flat_map(|t1| {
            right
                .transitions()
                .iter()
                .filter(move |t2| t2.trigger() == t1.trigger())
                .map(move |t2| join(t1, t2))
        })
        .collect();

    debug!(
        left = left.len(),
        right = right.len(),
        joined = joined.len(),
        "composed state machines"
    );

    StateMachine::new(joined)
}

fn join<S1: State, S2: State, T: Trigger>(
    t1: &Transition<S1, T>,
    t2: &Transition<S2, T>,
) -> Transition<Pair<S1, S2>, T> {
    let source = Pair(t1.source().clone(), t2.source().clone());
    let destination = Pair(t1.destination().clone(), t2.destination().clone());
    let trigger = t1.trigger().clone();

    match Guard::conjoin(t1.guard(), t2.guard()) {
        Some(guard) => Transition::guarded(source, trigger, destination, guard),
        None => Transition::new(source, trigger, destination),
    }
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Method form of [`compose`]: `self` supplies the first pair component.
    pub fn combine<S2: State>(
        &self,
        other: &StateMachine<S2, T>,
    ) -> Result<StateMachine<Pair<S, S2>, T>, DefinitionError> {
        compose(self, other)
    }
}
