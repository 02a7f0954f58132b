//! Lockstep: deterministic finite state machines with lock-step composition.
//!
//! A [`StateMachine`] is an immutable, validated set of transitions over any
//! pair of comparable state and trigger types. Definitions are checked once,
//! at construction: no `(source, trigger)` key may map to more than one
//! destination. After that every query is a pure read, so a machine can be
//! shared freely across threads.
//!
//! # Core Concepts
//!
//! - **Transitions**: `(source, trigger) -> destination`, optionally guarded
//! - **Builder**: group `allow(trigger, destination)` calls under a source state
//! - **Composition**: join two machines on their shared triggers into a
//!   machine over paired states that moves both in lock-step
//! - **Diagrams**: render a machine as a `stateDiagram-v2` listing
//!
//! # Example
//!
//! ```rust
//! use lockstep::core::{Pair, StateMachine};
//! use lockstep::workflow_enum;
//!
//! workflow_enum! {
//!     enum Issue { Created, Assigned, Resolved }
//! }
//! workflow_enum! {
//!     enum Project { InPlanning, InExecution }
//! }
//! workflow_enum! {
//!     enum Command { Assign, Resolve }
//! }
//!
//! let issue = StateMachine::builder(Issue::Created)
//!     .allow(Command::Assign, Issue::Assigned)
//!     .for_state(Issue::Assigned)
//!     .allow(Command::Resolve, Issue::Resolved)
//!     .build()
//!     .unwrap();
//!
//! let project = StateMachine::builder(Project::InPlanning)
//!     .allow(Command::Assign, Project::InPlanning)
//!     .for_state(Project::InExecution)
//!     .allow(Command::Resolve, Project::InExecution)
//!     .build()
//!     .unwrap();
//!
//! let both = issue.combine(&project).unwrap();
//! let next = both.fire(&Pair(Issue::Created, Project::InPlanning), &Command::Assign);
//! assert_eq!(next, Some(&Pair(Issue::Assigned, Project::InPlanning)));
//!
//! assert_eq!(
//!     both.to_diagram_text(),
//!     "stateDiagram-v2\r\n\
//!      (Created, InPlanning) --> (Assigned, InPlanning) : Assign\r\n\
//!      (Assigned, InExecution) --> (Resolved, InExecution) : Resolve"
//! );
//! ```

pub mod builder;
pub mod compose;
pub mod core;
pub mod diagram;
pub mod workflow;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use compose::compose;
pub use self::core::{DefinitionError, Guard, Pair, State, StateMachine, Transition, Trigger};
pub use diagram::to_diagram_text;
