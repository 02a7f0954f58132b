//! Core state machine types and logic.
//!
//! - `State` / `Trigger` capability traits and the `Pair` product state
//! - `Transition` values with optional `Guard`s
//! - The validated `StateMachine` engine
//! - Immutable `StateHistory` audit trails
//!
//! Everything here is pure: machines are validated once and never mutated.

mod error;
mod guard;
mod history;
mod machine;
mod state;
mod transition;

pub use error::{AmbiguousGroup, DefinitionError, ParseNameError};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use machine::StateMachine;
pub use state::{Pair, State, Trigger};
pub use transition::Transition;
