//! Builder API for ergonomic state machine construction.
//!
//! [`StateMachineBuilder`] groups `allow(trigger, destination)` declarations
//! under a selected source state, and [`workflow_enum!`](crate::workflow_enum)
//! declares enums ready to be used as states and triggers.
//!
//! # Example
//!
//! ```
//! use lockstep::builder::StateMachineBuilder;
//! use lockstep::workflow_enum;
//!
//! workflow_enum! {
//!     enum Light { Red, Green, Yellow }
//! }
//! workflow_enum! {
//!     enum Signal { Next }
//! }
//!
//! let machine = StateMachineBuilder::start_at(Light::Red)
//!     .allow(Signal::Next, Light::Green)
//!     .for_state(Light::Green)
//!     .allow(Signal::Next, Light::Yellow)
//!     .for_state(Light::Yellow)
//!     .allow(Signal::Next, Light::Red)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(machine.fire(&Light::Yellow, &Signal::Next), Some(&Light::Red));
//! ```

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
