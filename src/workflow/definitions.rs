//! Standard bug-tracker workflow definitions.

use super::types::{IssueState, IssueTrigger, ProjectState, ProjectTrigger};
use crate::builder::StateMachineBuilder;
use crate::core::{DefinitionError, Pair, StateMachine, Transition};

pub type IssueWorkflow = StateMachine<IssueState, IssueTrigger>;
pub type ProjectWorkflow = StateMachine<ProjectState, ProjectTrigger>;
pub type ProjectIssueWorkflow = StateMachine<ProjectState, IssueTrigger>;
pub type CombinedIssueWorkflow = StateMachine<Pair<ProjectState, IssueState>, IssueTrigger>;

/// Full issue lifecycle, including creation from `Null` and re-assignment of
/// terminated issues.
pub fn issue_workflow() -> Result<IssueWorkflow, DefinitionError> {
    use IssueState::*;
    use IssueTrigger::*;

    StateMachine::new(vec![
        Transition::new(Null, Create, Created),
        Transition::new(Created, Assign, Assigned),
        Transition::new(Created, Terminate, Terminated),
        Transition::new(Assigned, Resolve, Resolved),
        Transition::new(Assigned, Terminate, Terminated),
        Transition::new(Terminated, Assign, Assigned),
    ])
}

/// Issue lifecycle without creation or re-assignment.
pub fn simple_issue_workflow() -> Result<IssueWorkflow, DefinitionError> {
    StateMachineBuilder::start_at(IssueState::Created)
        .allow(IssueTrigger::Assign, IssueState::Assigned)
        .allow(IssueTrigger::Terminate, IssueState::Terminated)
        .for_state(IssueState::Assigned)
        .allow(IssueTrigger::Resolve, IssueState::Resolved)
        .allow(IssueTrigger::Terminate, IssueState::Terminated)
        .build()
}

pub fn project_workflow() -> Result<ProjectWorkflow, DefinitionError> {
    StateMachineBuilder::start_at(ProjectState::Created)
        .allow(ProjectTrigger::Plan, ProjectState::InPlanning)
        .for_state(ProjectState::InPlanning)
        .allow(ProjectTrigger::Start, ProjectState::InExecution)
        .allow(ProjectTrigger::Park, ProjectState::Parked)
        .for_state(ProjectState::Parked)
        .allow(ProjectTrigger::ReOpen, ProjectState::InPlanning)
        .for_state(ProjectState::InExecution)
        .allow(ProjectTrigger::Close, ProjectState::Closed)
        .for_state(ProjectState::Closed)
        .allow(ProjectTrigger::ReOpen, ProjectState::InPlanning)
        .build()
}

/// Which issue commands each project state permits. Issue commands never
/// move the project itself.
pub fn project_issue_workflow() -> Result<ProjectIssueWorkflow, DefinitionError> {
    StateMachineBuilder::start_at(ProjectState::InPlanning)
        .allow(IssueTrigger::Create, ProjectState::InPlanning)
        .allow(IssueTrigger::Terminate, ProjectState::InPlanning)
        .for_state(ProjectState::InExecution)
        .allow(IssueTrigger::Assign, ProjectState::InExecution)
        .allow(IssueTrigger::Terminate, ProjectState::InExecution)
        .allow(IssueTrigger::Resolve, ProjectState::InExecution)
        .build()
}

/// Issue lifecycle synchronized with the project: an issue command fires only
/// when both the project state and the issue state allow it.
pub fn combined_issue_workflow() -> Result<CombinedIssueWorkflow, DefinitionError> {
    project_issue_workflow()?.combine(&issue_workflow()?)
}
