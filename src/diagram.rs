//! Text export of a machine's transitions as a `stateDiagram-v2` listing.

use crate::core::{State, StateMachine, Transition, Trigger};
use std::fmt::Display;

/// First line of every diagram.
pub const DIAGRAM_HEADER: &str = "stateDiagram-v2";

/// Line separator used by [`to_diagram_text`].
pub const LINE_BREAK: &str = "\r\n";

/// Header followed by one `source --> destination : trigger` line per
/// transition, in stored order.
pub fn diagram_lines<S, T>(machine: &StateMachine<S, T>) -> Vec<String>
where
    S: State + Display,
    T: Trigger + Display,
{
    std::iter::once(DIAGRAM_HEADER.to_string())
        .chain(machine.transitions().iter().map(render))
        .collect()
}

/// Diagram lines joined with CRLF, without a trailing line break.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{StateMachine, Transition};
/// use lockstep::diagram::to_diagram_text;
///
/// let machine = StateMachine::new(vec![Transition::new("A", "Go", "B")]).unwrap();
/// assert_eq!(to_diagram_text(&machine), "stateDiagram-v2\r\nA --> B : Go");
/// ```
pub fn to_diagram_text<S, T>(machine: &StateMachine<S, T>) -> String
where
    S: State + Display,
    T: Trigger + Display,
{
    diagram_lines(machine).join(LINE_BREAK)
}

fn render<S: State + Display, T: Trigger + Display>(transition: &Transition<S, T>) -> String {
    format!(
        "{} --> {} : {}",
        transition.source(),
        transition.destination(),
        transition.trigger()
    )
}

impl<S: State + Display, T: Trigger + Display> StateMachine<S, T> {
    /// Method form of [`to_diagram_text`].
    pub fn to_diagram_text(&self) -> String {
        to_diagram_text(self)
    }
}
