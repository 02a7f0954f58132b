//! Errors raised while defining state machines.

use std::fmt;
use thiserror::Error;

/// A `(source, trigger)` key declared with more than one destination.
///
/// States and triggers are only required to be `Debug`, so every field holds
/// the `Debug` rendering. String states therefore appear quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousGroup {
    pub source: String,
    pub trigger: String,
    pub destinations: Vec<String>,
}

impl fmt::Display for AmbiguousGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --{}--> [{}]",
            self.source,
            self.trigger,
            self.destinations.join(", ")
        )
    }
}

/// Errors that can occur when constructing a state machine.
///
/// The message lists each [`AmbiguousGroup`] in `Debug` form: fieldless enums
/// read as their variant name, `"Created"` keeps its quotes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionError {
    #[error("The following transitions are ambiguous: {}", render_groups(.groups))]
    Ambiguous { groups: Vec<AmbiguousGroup> },
}

fn render_groups(groups: &[AmbiguousGroup]) -> String {
    groups
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error returned when text does not name any variant of a workflow enum.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {type_name} '{input}'")]
pub struct ParseNameError {
    pub type_name: &'static str,
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_error_names_every_group() {
        let err = DefinitionError::Ambiguous {
            groups: vec![
                AmbiguousGroup {
                    source: "Created".into(),
                    trigger: "Assign".into(),
                    destinations: vec!["Assigned".into(), "Resolved".into()],
                },
                AmbiguousGroup {
                    source: "Assigned".into(),
                    trigger: "Resolve".into(),
                    destinations: vec!["Resolved".into(), "Created".into()],
                },
            ],
        };

        let message = err.to_string();
        assert!(message.contains("Created --Assign--> [Assigned, Resolved]"));
        assert!(message.contains("Assigned --Resolve--> [Resolved, Created]"));
    }

    #[test]
    fn parse_error_names_type_and_input() {
        let err = ParseNameError {
            type_name: "IssueTrigger",
            input: "reopen".into(),
        };
        assert_eq!(err.to_string(), "unknown IssueTrigger 'reopen'");
    }
}
