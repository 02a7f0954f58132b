//! Interactive Bug Tracker
//!
//! This example drives a project and its issue from the command line.
//!
//! Key concepts:
//! - Project commands go through the project workflow
//! - Issue commands go through the project/issue composition, so the project
//!   state decides which issue commands are available
//! - Records are immutable; every accepted command yields a new project
//!
//! Commands are `<command> <context>`, e.g. `plan project` or `create issue`.
//! Type `exit` to quit. Set `RUST_LOG=lockstep=debug` to see engine logs.
//!
//! Run with: cargo run --example bug_tracker

use lockstep::core::ParseNameError;
use lockstep::workflow::{
    IssueTrigger, Project, ProjectIssueWorkflowService, ProjectTrigger, ProjectWorkflowService,
    WorkflowError,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CommandError {
    #[error("Invalid command: {0}")]
    Malformed(String),

    #[error("Invalid context {0}. Only 'project' and 'issue' are valid")]
    UnknownContext(String),

    #[error("unknown command {0}")]
    UnknownCommand(#[from] ParseNameError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

enum Command {
    Project(ProjectTrigger),
    Issue(IssueTrigger),
}

fn parse_command(line: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [command, context] = parts.as_slice() else {
        return Err(CommandError::Malformed(line.to_string()));
    };

    match context.to_ascii_lowercase().as_str() {
        "project" => Ok(Command::Project(command.parse()?)),
        "issue" => Ok(Command::Issue(command.parse()?)),
        _ => Err(CommandError::UnknownContext(context.to_string())),
    }
}

fn apply(
    project: &Project,
    command: Command,
    projects: &ProjectWorkflowService,
    issues: &ProjectIssueWorkflowService,
) -> Result<Project, CommandError> {
    let updated = match command {
        Command::Project(trigger) => projects.fire(project, trigger)?,
        Command::Issue(trigger) => issues.fire(project, trigger)?,
    };
    Ok(updated)
}

fn print_status(
    project: &Project,
    projects: &ProjectWorkflowService,
    issues: &ProjectIssueWorkflowService,
) {
    let state = project.combined_state();
    println!("-----------------------------------------------------------------");
    println!("Current state: Project: {}, Issue: {}", state.0, state.1);
    println!("Issue commands allowed:");
    for trigger in issues.allowed_triggers(project) {
        println!("  {} issue", trigger);
    }
    println!("Project commands allowed:");
    for trigger in projects.allowed_triggers(project) {
        println!("  {} project", trigger);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init()
    {
        eprintln!("logging disabled: {}", e);
    }

    let projects = ProjectWorkflowService::standard()?;
    let issues = ProjectIssueWorkflowService::standard()?;

    println!(" --- Project workflow ---");
    println!("{}", projects.workflow().to_diagram_text());
    println!(" --- Issue workflow (project x issue) ---");
    println!("{}", issues.workflow().to_diagram_text());

    let mut project = Project::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_status(&project, &projects, &issues);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("exit") {
            return Ok(());
        }

        match parse_command(&line).and_then(|command| apply(&project, command, &projects, &issues)) {
            Ok(updated) => project = updated,
            Err(e) => println!("{}", e),
        }
    }
}
