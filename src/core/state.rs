//! Capability traits for states and triggers, plus the product state.
//!
//! The engine never assumes states or triggers are enumerations. Any type
//! that can be cloned, compared for equality and debugged will do, including
//! the `Pair` produced by composing two machines.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// A point in a workflow's lifecycle.
///
/// Blanket-implemented for every `Clone + PartialEq + Debug` type. Equality
/// is the only comparison the engine performs.
///
/// # Example
///
/// ```rust
/// use lockstep::core::State;
///
/// fn accepts_state<S: State>(_s: S) {}
///
/// accepts_state("Created");
/// accepts_state(42u8);
/// accepts_state(("Created", 1));
/// ```
pub trait State: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> State for T {}

/// An external event or command requesting a state change.
///
/// Blanket-implemented with the same bounds as [`State`].
pub trait Trigger: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> Trigger for T {}

/// Product state of two composed machines.
///
/// The first component belongs to the left machine of the composition, the
/// second to the right one. Renders as `(first, second)`.
///
/// # Example
///
/// ```rust
/// use lockstep::core::Pair;
///
/// let pair = Pair("InPlanning", "Created");
/// assert_eq!(pair.to_string(), "(InPlanning, Created)");
/// assert_eq!(pair, Pair::from(("InPlanning", "Created")));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Pair<A, B>(pub A, pub B);

impl<A, B> Pair<A, B> {
    /// Split the pair back into a tuple.
    pub fn into_tuple(self) -> (A, B) {
        (self.0, self.1)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((a, b): (A, B)) -> Self {
        Pair(a, b)
    }
}

impl<A: Display, B: Display> Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Light {
        Red,
        Green,
    }

    impl Display for Light {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    fn is_state<S: State>() {}
    fn is_trigger<T: Trigger>() {}

    #[test]
    fn arbitrary_comparable_types_are_states() {
        is_state::<Light>();
        is_state::<String>();
        is_state::<Pair<Light, u32>>();
        is_trigger::<&'static str>();
    }

    #[test]
    fn pair_equality_is_structural() {
        assert_eq!(Pair(Light::Red, 1), Pair(Light::Red, 1));
        assert_ne!(Pair(Light::Red, 1), Pair(Light::Green, 1));
        assert_ne!(Pair(Light::Red, 1), Pair(Light::Red, 2));
    }

    #[test]
    fn pair_displays_both_components() {
        assert_eq!(Pair(Light::Red, Light::Green).to_string(), "(Red, Green)");
    }

    #[test]
    fn pair_converts_from_and_into_tuple() {
        let pair: Pair<Light, u8> = (Light::Green, 7).into();
        assert_eq!(pair.into_tuple(), (Light::Green, 7));
    }

    #[test]
    fn pair_serializes_correctly() {
        let pair = Pair(Light::Red, Light::Green);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: Pair<Light, Light> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
