//! Scenario tests: composition examples and the bug-tracker workflows.

use lockstep::core::{Pair, StateMachine, Transition};
use lockstep::workflow::{
    combined_issue_workflow, issue_workflow, project_workflow, simple_issue_workflow, Issue,
    IssueState, IssueTrigger, IssueWorkflowService, Project, ProjectIssueWorkflowService,
    ProjectState, ProjectTrigger, ProjectWorkflowService, WorkflowError,
};
use lockstep::{compose, to_diagram_text, workflow_enum, DefinitionError};

workflow_enum! {
    enum Node { A, B }
}

workflow_enum! {
    enum Edge { Go }
}

#[test]
fn issue_and_project_compose_in_lock_step() {
    let issue = StateMachine::new(vec![
        Transition::new(IssueState::Created, IssueTrigger::Assign, IssueState::Assigned),
        Transition::new(IssueState::Assigned, IssueTrigger::Resolve, IssueState::Resolved),
    ])
    .unwrap();
    let project = StateMachine::new(vec![
        Transition::new(ProjectState::InPlanning, IssueTrigger::Assign, ProjectState::InPlanning),
        Transition::new(ProjectState::InExecution, IssueTrigger::Resolve, ProjectState::InExecution),
    ])
    .unwrap();

    let composed = compose(&issue, &project).unwrap();

    assert!(composed.transitions().contains(&Transition::new(
        Pair(IssueState::Created, ProjectState::InPlanning),
        IssueTrigger::Assign,
        Pair(IssueState::Assigned, ProjectState::InPlanning),
    )));
    assert!(!composed
        .transitions()
        .iter()
        .any(|t| t.trigger() == &IssueTrigger::Assign && t.source().1 == ProjectState::InExecution));
}

#[test]
fn single_transition_diagram() {
    let machine = StateMachine::new(vec![Transition::new(Node::A, Edge::Go, Node::B)]).unwrap();
    let text = to_diagram_text(&machine);

    assert_eq!(text.split("\r\n").collect::<Vec<_>>(), vec!["stateDiagram-v2", "A --> B : Go"]);
}

#[test]
fn project_diagram_lists_builder_order() {
    let diagram = project_workflow().unwrap().to_diagram_text();

    assert_eq!(
        diagram,
        [
            "stateDiagram-v2",
            "Created --> InPlanning : Plan",
            "InPlanning --> InExecution : Start",
            "InPlanning --> Parked : Park",
            "Parked --> InPlanning : ReOpen",
            "InExecution --> Closed : Close",
            "Closed --> InPlanning : ReOpen",
        ]
        .join("\r\n")
    );
}

#[test]
fn combined_diagram_renders_pairs() {
    let diagram = combined_issue_workflow().unwrap().to_diagram_text();
    let lines: Vec<&str> = diagram.split("\r\n").collect();

    assert_eq!(lines[1], "(InPlanning, Null) --> (InPlanning, Created) : Create");
    assert_eq!(lines.len(), 9);
}

#[test]
fn ambiguous_definition_is_rejected_with_context() {
    let err = StateMachine::builder(IssueState::Created)
        .allow(IssueTrigger::Assign, IssueState::Assigned)
        .allow(IssueTrigger::Assign, IssueState::Resolved)
        .build()
        .unwrap_err();

    let DefinitionError::Ambiguous { groups } = &err;
    assert_eq!(groups.len(), 1);
    assert!(err.to_string().contains("Created --Assign--> [Assigned, Resolved]"));

    let as_workflow: WorkflowError = err.into();
    assert!(matches!(as_workflow, WorkflowError::Definition(_)));
}

#[test]
fn simple_workflow_is_a_subset_of_the_full_one() {
    let simple = simple_issue_workflow().unwrap();
    let full = issue_workflow().unwrap();

    for t in simple.transitions() {
        assert_eq!(full.fire(t.source(), t.trigger()), Some(t.destination()));
    }
}

#[test]
fn bug_tracker_session() {
    let projects = ProjectWorkflowService::standard().unwrap();
    let issues = ProjectIssueWorkflowService::standard().unwrap();

    let project = Project::new();
    assert!(issues.allowed_triggers(&project).is_empty());

    let project = projects.fire(&project, ProjectTrigger::Plan).unwrap();
    let project = issues.fire(&project, IssueTrigger::Create).unwrap();
    assert_eq!(
        project.combined_state(),
        Pair(ProjectState::InPlanning, IssueState::Created)
    );
    assert_eq!(issues.allowed_triggers(&project), vec![IssueTrigger::Terminate]);

    let refused = issues.fire(&project, IssueTrigger::Resolve).unwrap_err();
    assert_eq!(
        refused,
        WorkflowError::NotAllowed {
            trigger: "Resolve".into(),
            state: "(InPlanning, Created)".into(),
        }
    );

    let project = projects.fire(&project, ProjectTrigger::Start).unwrap();
    let project = issues.fire(&project, IssueTrigger::Assign).unwrap();
    let project = issues.fire(&project, IssueTrigger::Resolve).unwrap();
    assert_eq!(
        project.combined_state(),
        Pair(ProjectState::InExecution, IssueState::Resolved)
    );

    let project = projects.fire(&project, ProjectTrigger::Close).unwrap();
    assert_eq!(project.state(), ProjectState::Closed);
    assert_eq!(
        project.history().get_path(),
        vec![
            &ProjectState::Created,
            &ProjectState::InPlanning,
            &ProjectState::InExecution,
            &ProjectState::Closed
        ]
    );
    assert_eq!(
        project.issue().unwrap().history().triggers(),
        vec![&IssueTrigger::Create, &IssueTrigger::Assign, &IssueTrigger::Resolve]
    );
}

#[test]
fn rejected_trigger_leaves_record_untouched() {
    let service = IssueWorkflowService::standard().unwrap();
    let issue = Issue::new().with_title("Flaky test");
    let before = issue.clone();

    assert!(service.resolve(&issue).is_err());
    assert_eq!(issue, before);
}

#[test]
fn services_share_one_machine() {
    let service = ProjectWorkflowService::standard().unwrap();
    let clone = service.clone();

    assert!(std::ptr::eq(service.workflow(), clone.workflow()));
}

#[test]
fn workflow_names_parse_case_insensitively() {
    assert_eq!("reopen".parse::<ProjectTrigger>(), Ok(ProjectTrigger::ReOpen));
    assert_eq!("Terminate".parse::<IssueTrigger>(), Ok(IssueTrigger::Terminate));
    assert!("archive".parse::<IssueTrigger>().is_err());
}
