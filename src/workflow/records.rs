//! Immutable workflow records.
//!
//! Records never change in place. Every update method consumes or borrows a
//! record and returns a new one, so a rejected trigger leaves the caller's
//! value exactly as it was.

use super::types::{IssueState, IssueTrigger, ProjectState, ProjectTrigger};
use crate::core::{Pair, StateHistory, StateTransition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    id: Uuid,
    title: Option<String>,
    state: IssueState,
    history: StateHistory<IssueState, IssueTrigger>,
}

impl Default for Issue {
    fn default() -> Self {
        Self::new()
    }
}

impl Issue {
    /// A fresh issue in the `Created` state.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            state: IssueState::default(),
            history: StateHistory::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn state(&self) -> IssueState {
        self.state
    }

    pub fn history(&self) -> &StateHistory<IssueState, IssueTrigger> {
        &self.history
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// Copy of this issue in `state`, without touching the history.
    pub fn with_state(self, state: IssueState) -> Self {
        Self { state, ..self }
    }

    /// Copy of this issue moved by `trigger` to `to`, with the move recorded.
    pub(crate) fn transitioned(self, trigger: IssueTrigger, to: IssueState) -> Self {
        let history = self
            .history
            .record(StateTransition::now(self.state, trigger, to));
        Self {
            state: to,
            history,
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: Uuid,
    state: ProjectState,
    issue: Option<Issue>,
    history: StateHistory<ProjectState, ProjectTrigger>,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    /// A fresh project in the `Created` state, without an issue.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: ProjectState::default(),
            issue: None,
            history: StateHistory::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> ProjectState {
        self.state
    }

    pub fn issue(&self) -> Option<&Issue> {
        self.issue.as_ref()
    }

    pub fn history(&self) -> &StateHistory<ProjectState, ProjectTrigger> {
        &self.history
    }

    /// Project state paired with the issue state, `Null` when there is no
    /// issue yet.
    pub fn combined_state(&self) -> Pair<ProjectState, IssueState> {
        Pair(
            self.state,
            self.issue.as_ref().map_or(IssueState::Null, Issue::state),
        )
    }

    pub fn with_state(self, state: ProjectState) -> Self {
        Self { state, ..self }
    }

    pub fn with_issue(self, issue: Issue) -> Self {
        Self {
            issue: Some(issue),
            ..self
        }
    }

    pub(crate) fn transitioned(self, trigger: ProjectTrigger, to: ProjectState) -> Self {
        let history = self
            .history
            .record(StateTransition::now(self.state, trigger, to));
        Self {
            state: to,
            history,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_issue_starts_created() {
        let issue = Issue::new();
        assert_eq!(issue.state(), IssueState::Created);
        assert!(issue.title().is_none());
        assert!(issue.history().is_empty());
    }

    #[test]
    fn issues_have_distinct_ids() {
        assert_ne!(Issue::new().id(), Issue::new().id());
    }

    #[test]
    fn with_updates_keep_identity() {
        let issue = Issue::new();
        let id = issue.id();

        let updated = issue.with_title("Crash on save").with_state(IssueState::Assigned);
        assert_eq!(updated.id(), id);
        assert_eq!(updated.title(), Some("Crash on save"));
        assert_eq!(updated.state(), IssueState::Assigned);
    }

    #[test]
    fn transitioned_records_history() {
        let issue = Issue::new().transitioned(IssueTrigger::Assign, IssueState::Assigned);

        assert_eq!(issue.state(), IssueState::Assigned);
        assert_eq!(
            issue.history().get_path(),
            vec![&IssueState::Created, &IssueState::Assigned]
        );
    }

    #[test]
    fn combined_state_defaults_to_null_issue() {
        let project = Project::new().with_state(ProjectState::InPlanning);
        assert_eq!(
            project.combined_state(),
            Pair(ProjectState::InPlanning, IssueState::Null)
        );

        let project = project.with_issue(Issue::new());
        assert_eq!(
            project.combined_state(),
            Pair(ProjectState::InPlanning, IssueState::Created)
        );
    }

    #[test]
    fn project_serializes_correctly() {
        let project = Project::new()
            .transitioned(ProjectTrigger::Plan, ProjectState::InPlanning)
            .with_issue(Issue::new().with_title("Login fails"));

        let json = serde_json::to_string(&project).unwrap();
        let deserialized: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(project, deserialized);
    }
}
