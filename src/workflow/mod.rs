//! Bug-tracker workflows built on the core engine.
//!
//! Projects and issues are immutable records; services hold the shared
//! machines and return updated records when a trigger is accepted. Issue
//! commands on a project go through the composition of the project-level
//! issue gate with the issue lifecycle, so both must agree before anything
//! moves.
//!
//! # Example
//!
//! ```rust
//! use lockstep::workflow::{
//!     IssueState, IssueTrigger, Project, ProjectIssueWorkflowService, ProjectTrigger,
//!     ProjectWorkflowService,
//! };
//!
//! let projects = ProjectWorkflowService::standard().unwrap();
//! let issues = ProjectIssueWorkflowService::standard().unwrap();
//!
//! let project = projects.fire(&Project::new(), ProjectTrigger::Plan).unwrap();
//! let project = issues.fire(&project, IssueTrigger::Create).unwrap();
//! assert!(issues.fire(&project, IssueTrigger::Assign).is_err());
//!
//! let project = projects.fire(&project, ProjectTrigger::Start).unwrap();
//! let project = issues.fire(&project, IssueTrigger::Assign).unwrap();
//! assert_eq!(project.issue().unwrap().state(), IssueState::Assigned);
//! ```

pub mod definitions;
mod error;
mod records;
mod service;
mod types;

pub use definitions::{
    combined_issue_workflow, issue_workflow, project_issue_workflow, project_workflow,
    simple_issue_workflow,
};
pub use error::WorkflowError;
pub use records::{Issue, Project};
pub use service::{IssueWorkflowService, ProjectIssueWorkflowService, ProjectWorkflowService};
pub use types::{IssueState, IssueTrigger, ProjectState, ProjectTrigger};
