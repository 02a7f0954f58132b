//! States and triggers of the bug-tracker workflows.

use crate::workflow_enum;

workflow_enum! {
    /// Lifecycle of a single issue. `Null` stands for "no issue yet".
    #[derive(Default)]
    pub enum IssueState {
        Null,
        #[default]
        Created,
        Assigned,
        Resolved,
        Terminated,
    }
}

workflow_enum! {
    /// Commands applicable to an issue.
    pub enum IssueTrigger {
        Create,
        Assign,
        Resolve,
        Terminate,
    }
}

workflow_enum! {
    /// Lifecycle of a project.
    #[derive(Default)]
    pub enum ProjectState {
        #[default]
        Created,
        Parked,
        InPlanning,
        InExecution,
        Closed,
    }
}

workflow_enum! {
    /// Commands applicable to a project.
    pub enum ProjectTrigger {
        Plan,
        Start,
        Close,
        Park,
        ReOpen,
    }
}
