//! Guard predicates for conditionally enabling transitions.
//!
//! A guard is a nullary boolean predicate attached to a transition. When the
//! predicate returns `false` the transition is treated as absent: lookups
//! return nothing and the trigger is not listed as allowed.

use std::fmt;
use std::sync::Arc;

/// Shared predicate that decides whether a transition is currently enabled.
///
/// Guards are cheap to clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use lockstep::core::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let open = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&open);
/// let guard = Guard::new(move || flag.load(Ordering::SeqCst));
///
/// assert!(!guard.check());
/// open.store(true, Ordering::SeqCst);
/// assert!(guard.check());
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }

    /// Guard satisfied only when both guards are.
    pub fn and(&self, other: &Guard) -> Guard {
        let left = Arc::clone(&self.predicate);
        let right = Arc::clone(&other.predicate);
        Guard::new(move || left() && right())
    }

    /// Conjunction of two optional guards; a missing guard counts as satisfied.
    pub(crate) fn conjoin(left: Option<&Guard>, right: Option<&Guard>) -> Option<Guard> {
        match (left, right) {
            (Some(l), Some(r)) => Some(l.and(r)),
            (Some(g), None) | (None, Some(g)) => Some(g.clone()),
            (None, None) => None,
        }
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
