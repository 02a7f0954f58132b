//! Workflow service errors.

use crate::core::DefinitionError;
use thiserror::Error;

/// Errors raised when applying triggers to workflow records.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowError {
    #[error("{trigger} is not allowed for {state}")]
    NotAllowed { trigger: String, state: String },

    #[error("issue trigger {trigger} moves the project from {from} to {to}")]
    ProjectMoved {
        trigger: String,
        from: String,
        to: String,
    },

    #[error("Invalid workflow definition: {0}")]
    Definition(#[from] DefinitionError),
}
