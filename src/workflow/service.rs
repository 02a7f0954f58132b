//! Services that apply triggers to workflow records.
//!
//! A service holds a shared machine and translates "no transition" into
//! [`WorkflowError::NotAllowed`]. Records are never mutated; a successful
//! trigger returns an updated copy.

use super::definitions::{
    combined_issue_workflow, issue_workflow, project_workflow, CombinedIssueWorkflow,
    IssueWorkflow, ProjectWorkflow,
};
use super::error::WorkflowError;
use super::records::{Issue, Project};
use super::types::{IssueState, IssueTrigger, ProjectTrigger};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info};

fn not_allowed(trigger: impl Display, state: impl Display) -> WorkflowError {
    let err = WorkflowError::NotAllowed {
        trigger: trigger.to_string(),
        state: state.to_string(),
    };
    debug!(%err, "trigger refused");
    err
}

/// Applies issue triggers to standalone issues.
#[derive(Clone, Debug)]
pub struct IssueWorkflowService {
    workflow: Arc<IssueWorkflow>,
}

impl IssueWorkflowService {
    pub fn new(workflow: Arc<IssueWorkflow>) -> Self {
        Self { workflow }
    }

    /// Service over [`issue_workflow`].
    pub fn standard() -> Result<Self, WorkflowError> {
        Ok(Self::new(Arc::new(issue_workflow()?)))
    }

    pub fn workflow(&self) -> &IssueWorkflow {
        &self.workflow
    }

    pub fn allowed_triggers(&self, issue: &Issue) -> Vec<IssueTrigger> {
        let state = issue.state();
        self.workflow.allowed_triggers(&state).copied().collect()
    }

    pub fn fire(&self, issue: &Issue, trigger: IssueTrigger) -> Result<Issue, WorkflowError> {
        let state = issue.state();
        let destination = *self
            .workflow
            .fire(&state, &trigger)
            .ok_or_else(|| not_allowed(trigger, state))?;

        info!(issue = %issue.id(), %trigger, from = %state, to = %destination, "issue transitioned");
        Ok(issue.clone().transitioned(trigger, destination))
    }

    pub fn assign(&self, issue: &Issue) -> Result<Issue, WorkflowError> {
        self.fire(issue, IssueTrigger::Assign)
    }

    pub fn resolve(&self, issue: &Issue) -> Result<Issue, WorkflowError> {
        self.fire(issue, IssueTrigger::Resolve)
    }

    pub fn terminate(&self, issue: &Issue) -> Result<Issue, WorkflowError> {
        self.fire(issue, IssueTrigger::Terminate)
    }
}

/// Applies project triggers to projects.
#[derive(Clone, Debug)]
pub struct ProjectWorkflowService {
    workflow: Arc<ProjectWorkflow>,
}

impl ProjectWorkflowService {
    pub fn new(workflow: Arc<ProjectWorkflow>) -> Self {
        Self { workflow }
    }

    /// Service over [`project_workflow`].
    pub fn standard() -> Result<Self, WorkflowError> {
        Ok(Self::new(Arc::new(project_workflow()?)))
    }

    pub fn workflow(&self) -> &ProjectWorkflow {
        &self.workflow
    }

    pub fn allowed_triggers(&self, project: &Project) -> Vec<ProjectTrigger> {
        let state = project.state();
        self.workflow.allowed_triggers(&state).copied().collect()
    }

    pub fn fire(&self, project: &Project, trigger: ProjectTrigger) -> Result<Project, WorkflowError> {
        let state = project.state();
        let destination = *self
            .workflow
            .fire(&state, &trigger)
            .ok_or_else(|| not_allowed(trigger, state))?;

        info!(project = %project.id(), %trigger, from = %state, to = %destination, "project transitioned");
        Ok(project.clone().transitioned(trigger, destination))
    }
}

/// Applies issue triggers to a project's issue, consulting the combined
/// project/issue machine so the project state gates every issue command.
#[derive(Clone, Debug)]
pub struct ProjectIssueWorkflowService {
    workflow: Arc<CombinedIssueWorkflow>,
}

impl ProjectIssueWorkflowService {
    /// Wrap a combined machine.
    ///
    /// Issue triggers must leave the project component unchanged: the
    /// project history only records project triggers.
    pub fn new(workflow: Arc<CombinedIssueWorkflow>) -> Result<Self, WorkflowError> {
        if let Some(t) = workflow
            .transitions()
            .iter()
            .find(|t| t.source().0 != t.destination().0)
        {
            return Err(WorkflowError::ProjectMoved {
                trigger: t.trigger().to_string(),
                from: t.source().0.to_string(),
                to: t.destination().0.to_string(),
            });
        }
        Ok(Self { workflow })
    }

    /// Service over [`combined_issue_workflow`].
    pub fn standard() -> Result<Self, WorkflowError> {
        Self::new(Arc::new(combined_issue_workflow()?))
    }

    pub fn workflow(&self) -> &CombinedIssueWorkflow {
        &self.workflow
    }

    pub fn allowed_triggers(&self, project: &Project) -> Vec<IssueTrigger> {
        let state = project.combined_state();
        self.workflow.allowed_triggers(&state).copied().collect()
    }

    /// Fire `trigger` against the project's combined state.
    ///
    /// Only the project's issue moves; it is created on demand.
    pub fn fire(&self, project: &Project, trigger: IssueTrigger) -> Result<Project, WorkflowError> {
        let state = project.combined_state();
        let destination = *self
            .workflow
            .fire(&state, &trigger)
            .ok_or_else(|| not_allowed(trigger, state))?;

        info!(project = %project.id(), %trigger, from = %state, to = %destination, "project issue transitioned");

        let issue = project
            .issue()
            .cloned()
            .unwrap_or_else(|| Issue::new().with_state(IssueState::Null))
            .transitioned(trigger, destination.1);
        Ok(project.clone().with_issue(issue))
    }
}
