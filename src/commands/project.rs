//! Project commands: create, list and show.
//!
//! Values missing from the command line are prompted for, falling back to
//! the same defaults the creation form always offered: name `New Project`,
//! owner and type `Default`, due date now, scope from `default_scope.txt`.

use crate::{
    db::{db::Db, projects::Projects},
    libs::{
        error::{TrackerError, TrackerResult, Warning},
        formatter::{self, parse_timestamp},
        messages::Message,
        project::NewProject,
        scope::{self, DEFAULT_SCOPE_FILE},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::PathBuf;

const DEFAULT_PROJECT_NAME: &str = "New Project";
const DEFAULT_OWNER: &str = "Default";
const DEFAULT_PROJECT_TYPE: &str = "Default";

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a new project
    Create(CreateProjectArgs),
    /// List all project names
    List,
    /// Show the details of a project
    Show {
        /// Project name, selected from a list when omitted
        name: Option<String>,
        /// Print the project as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Default, Args)]
struct CreateProjectArgs {
    /// Project name
    #[arg(short, long)]
    name: Option<String>,
    /// Project owner
    #[arg(short, long)]
    owner: Option<String>,
    /// Project type
    #[arg(short = 't', long = "type")]
    project_type: Option<String>,
    /// Due date as YYYY-MM-DD HH:mm:ss
    #[arg(short, long)]
    due: Option<String>,
    /// Text file holding the project scope
    #[arg(short, long)]
    scope_file: Option<PathBuf>,
    /// Allowed file format
    #[arg(short, long)]
    format: Option<String>,
    /// Use defaults for every value not given instead of prompting
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(db: &Db, args: ProjectArgs) -> Result<()> {
    match args.command {
        ProjectCommand::Create(create_args) => handle_create(db, create_args),
        ProjectCommand::List => handle_list(db),
        ProjectCommand::Show { name, json } => handle_show(db, name, json),
    }
}

fn handle_create(db: &Db, mut args: CreateProjectArgs) -> Result<()> {
    if !args.yes {
        prompt_missing(&mut args)?;
    }

    let (project, warning) = match new_project(&args) {
        Ok(resolved) => resolved,
        Err(TrackerError::Format { .. }) => {
            msg_error!(Message::InvalidDateFormat);
            return Ok(());
        }
        Err(e) => {
            msg_error!(Message::ScopeReadFailed(e.to_string()));
            return Ok(());
        }
    };
    if let Some(Warning::ScopeNotFound(path)) = &warning {
        msg_warning!(Message::ScopeFileNotFound(path.display().to_string()));
    }

    match Projects::new(db).create(&project) {
        Ok(_) => msg_success!(Message::ProjectCreated(project.name)),
        Err(e) => msg_error!(Message::ProjectCreateFailed(e.to_string())),
    }
    Ok(())
}

/// Asks for every value missing from the command line, in form order.
/// Blank answers stay missing so [`new_project`] applies the default.
fn prompt_missing(args: &mut CreateProjectArgs) -> Result<()> {
    fn ask(value: &mut Option<String>, message: Message, default: &str) -> Result<()> {
        if value.is_none() {
            let answer: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(message.to_string())
                .default(default.to_string())
                .allow_empty(true)
                .interact_text()?;
            *value = Some(answer);
        }
        Ok(())
    }

    ask(&mut args.owner, Message::PromptProjectOwner, DEFAULT_OWNER)?;
    ask(&mut args.project_type, Message::PromptProjectType, DEFAULT_PROJECT_TYPE)?;
    ask(&mut args.name, Message::PromptProjectName, DEFAULT_PROJECT_NAME)?;
    ask(&mut args.due, Message::PromptProjectDueDate, "")?;

    let mut scope_file = args.scope_file.as_ref().map(|path| path.display().to_string());
    ask(&mut scope_file, Message::PromptScopeFile, DEFAULT_SCOPE_FILE)?;
    args.scope_file = scope_file.map(PathBuf::from);

    ask(&mut args.format, Message::PromptAllowedFiles, "")
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Builds the project to insert from the given values, filling blanks with
/// the form defaults and reading the scope file.
///
/// A malformed due date is a [`TrackerError::Format`]. A missing scope file
/// is not an error: the scope is empty and the warning is returned with it.
fn new_project(args: &CreateProjectArgs) -> TrackerResult<(NewProject, Option<Warning>)> {
    let name = or_default(args.name.as_deref(), DEFAULT_PROJECT_NAME);
    let owner = or_default(args.owner.as_deref(), DEFAULT_OWNER);
    let project_type = or_default(args.project_type.as_deref(), DEFAULT_PROJECT_TYPE);

    let due_date = match args.due.as_deref() {
        Some(due) if !due.trim().is_empty() => parse_timestamp(due)?,
        _ => formatter::now(),
    };

    let scope_file = match &args.scope_file {
        Some(path) if !path.as_os_str().is_empty() => path.clone(),
        _ => PathBuf::from(DEFAULT_SCOPE_FILE),
    };
    let scope = scope::load(&scope_file)?;

    let project = NewProject::new(&name, due_date, &owner, &project_type)
        .with_scope(scope.text)
        .with_allowed_files(args.format.clone().unwrap_or_default());

    Ok((project, scope.warning))
}

fn handle_list(db: &Db) -> Result<()> {
    let names = project_names(db);
    if names.is_empty() {
        msg_info!(Message::ProjectsNotFound);
        return Ok(());
    }

    msg_print!(Message::ProjectListHeader, true);
    View::project_names(&names);
    Ok(())
}

fn handle_show(db: &Db, name: Option<String>, json: bool) -> Result<()> {
    let name = match name {
        Some(name) if name.trim().is_empty() => {
            msg_warning!(Message::ProjectNameMissing);
            return Ok(());
        }
        Some(name) => name,
        None => match select_project(db)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    match Projects::new(db).get_details(&name) {
        Ok(Some(project)) if json => println!("{}", serde_json::to_string_pretty(&project)?),
        Ok(Some(project)) => {
            msg_print!(Message::ProjectDetailsHeader(project.name.clone()), true);
            View::project(&project);
        }
        Ok(None) => msg_warning!(Message::ProjectNotFound(name)),
        Err(e) => msg_error!(Message::ProjectDetailsFailed(e.to_string())),
    }
    Ok(())
}

/// Project names for selection lists. A failed query is logged and shown
/// as an empty list so the current action can still continue.
pub(crate) fn project_names(db: &Db) -> Vec<String> {
    match Projects::new(db).list_names() {
        Ok(names) => names,
        Err(e) => {
            tracing::error!(error = %e, "failed to list project names");
            msg_error!(Message::ProjectListFailed(e.to_string()));
            Vec::new()
        }
    }
}

/// Lets the user pick a project by name. `None` when there is nothing to
/// pick or the selection was cancelled.
pub(crate) fn select_project(db: &Db) -> Result<Option<String>> {
    let mut names = project_names(db);
    if names.is_empty() {
        msg_info!(Message::ProjectsNotFound);
        return Ok(None);
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectProject.to_string())
        .items(&names)
        .default(0)
        .interact_opt()?;

    match selection {
        Some(index) => Ok(Some(names.swap_remove(index))),
        None => {
            msg_warning!(Message::ProjectNotSelected);
            Ok(None)
        }
    }
}
