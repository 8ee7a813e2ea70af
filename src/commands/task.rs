use super::project::select_project;
use crate::{
    db::{db::Db, projects::Projects, tasks::Tasks},
    libs::{error::TrackerError, messages::Message, task::Task, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task to a project
    Create {
        /// Project name, selected from a list when omitted
        #[arg(short, long)]
        project: Option<String>,
        /// Task name
        #[arg(short, long)]
        name: Option<String>,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Start as YYYY-MM-DD HH:mm:ss
        #[arg(short, long)]
        start: Option<String>,
        /// End as YYYY-MM-DD HH:mm:ss
        #[arg(short, long)]
        end: Option<String>,
    },
    /// List all tasks of a project
    List {
        /// Project name, selected from a list when omitted
        project: Option<String>,
        /// Print the tasks as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn cmd(db: &Db, args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Create {
            project,
            name,
            description,
            start,
            end,
        } => handle_create(db, project, name, description, start, end),
        TaskCommand::List { project, json } => handle_list(db, project, json),
    }
}

fn handle_create(
    db: &Db,
    project: Option<String>,
    name: Option<String>,
    description: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let Some((project_name, project_id)) = resolve_project(db, project)? else {
        return Ok(());
    };

    let ask = |value: Option<String>, message: Message, allow_empty: bool| -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None => Ok(Input::with_theme(&ColorfulTheme::default())
                .with_prompt(message.to_string())
                .allow_empty(allow_empty)
                .interact_text()?),
        }
    };

    let name = ask(name, Message::PromptTaskName, true)?;
    let description = ask(description, Message::PromptTaskDescription, true)?;
    let start = ask(start, Message::PromptTaskStart, false)?;
    let end = ask(end, Message::PromptTaskEnd, false)?;

    match Tasks::new(db).create(project_id, &name, &description, &start, &end) {
        Ok(_) => msg_success!(Message::TaskCreated(project_name)),
        Err(TrackerError::Format { .. }) => msg_error!(Message::InvalidDateFormat),
        Err(e) => msg_error!(Message::TaskCreateFailed(e.to_string())),
    }
    Ok(())
}

fn handle_list(db: &Db, project: Option<String>, json: bool) -> Result<()> {
    let Some((project_name, project_id)) = resolve_project(db, project)? else {
        return Ok(());
    };

    match Tasks::new(db).list_for_project(project_id) {
        Ok(tasks) if json => println!("{}", tasks_json(&tasks)?),
        Ok(tasks) if tasks.is_empty() => msg_info!(Message::TasksNotFoundForProject(project_name)),
        Ok(tasks) => {
            msg_print!(Message::TasksHeader(project_name), true);
            View::tasks(&tasks);
        }
        Err(e) => {
            tracing::error!(error = %e, project_id, "failed to list tasks");
            msg_error!(Message::TaskListFailed(e.to_string()));
        }
    }
    Ok(())
}

/// JSON array for `task list --json`; `[]` when the project has no tasks.
fn tasks_json(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tasks)
}

/// Turns a typed or selected project name into `(name, id)`, reporting
/// misses to the user.
fn resolve_project(db: &Db, project: Option<String>) -> Result<Option<(String, i64)>> {
    let name = match project {
        Some(name) => name,
        None => match select_project(db)? {
            Some(name) => name,
            None => return Ok(None),
        },
    };

    match Projects::new(db).resolve_id(&name) {
        Ok(Some(id)) => Ok(Some((name, id))),
        Ok(None) => {
            msg_warning!(Message::ProjectNotFound(name));
            Ok(None)
        }
        Err(e) => {
            msg_error!(Message::ProjectDetailsFailed(e.to_string()));
            Ok(None)
        }
    }
}
