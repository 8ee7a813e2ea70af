//! Display implementation for protask messages.
//!
//! All user-facing text lives in this one match so wording stays
//! consistent between the prompts, the success notices and the errors.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === PROJECT MESSAGES ===
            Message::ProjectCreated(name) => format!("Project '{}' created successfully!", name),
            Message::ProjectCreateFailed(error) => format!("Error creating project: {}", error),
            Message::ProjectNotFound(name) => format!("Project '{}' not found. Please enter a valid project name.", name),
            Message::ProjectNameTaken(name) => format!("A project named '{}' already exists.", name),
            Message::ProjectRequiredFields => "Name, owner, and project type are required fields.".to_string(),
            Message::ProjectsNotFound => "No projects found.".to_string(),
            Message::ProjectListHeader => "Projects:".to_string(),
            Message::ProjectListFailed(error) => format!("Error fetching project names: {}", error),
            Message::ProjectDetailsHeader(name) => format!("Project '{}'", name),
            Message::ProjectDetailsFailed(error) => format!("Error fetching project details: {}", error),
            Message::ProjectNameMissing => "Please enter a project name.".to_string(),
            Message::ProjectNotSelected => "Please select a project first.".to_string(),

            // === SCOPE MESSAGES ===
            Message::ScopeFileNotFound(path) => format!("File {} not found. Using an empty scope.", path),
            Message::ScopeReadFailed(error) => format!("Error reading project scope: {}", error),

            // === TASK MESSAGES ===
            Message::TaskCreated(project) => format!("Task added to project '{}' successfully!", project),
            Message::TaskCreateFailed(error) => format!("Error adding task to project: {}", error),
            Message::TasksNotFoundForProject(project) => format!("No tasks found for project '{}'.", project),
            Message::TasksHeader(project) => format!("Tasks of project '{}':", project),
            Message::TaskListFailed(error) => format!("Error fetching tasks for project: {}", error),
            Message::InvalidDateFormat => "Invalid date format. Please enter a date as YYYY-MM-DD HH:mm:ss.".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbConnectionFailed(error) => format!("Error creating database connection: {}", error),
            Message::ChangesCommitted => "Changes committed to the database.".to_string(),
            Message::NothingToCommit => "Nothing to commit, every change is already saved.".to_string(),
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => {
                format!("  v{}: {} (applied: {})", version, name, applied_at)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),

            // === PROMPTS ===
            Message::PromptProjectName => "Project name".to_string(),
            Message::PromptProjectOwner => "Project owner".to_string(),
            Message::PromptProjectType => "Project type".to_string(),
            Message::PromptProjectDueDate => "Due date (YYYY-MM-DD HH:mm:ss, empty for now)".to_string(),
            Message::PromptScopeFile => "File with the project scope".to_string(),
            Message::PromptAllowedFiles => "Allowed file format".to_string(),
            Message::PromptSelectProject => "Select project".to_string(),
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptTaskStart => "Task start (YYYY-MM-DD HH:mm:ss)".to_string(),
            Message::PromptTaskEnd => "Task end (YYYY-MM-DD HH:mm:ss)".to_string(),
            Message::PromptDatabaseFileName => "Database file name".to_string(),
            Message::PromptDatabaseDirectory => "Database directory (empty for the default data directory)".to_string(),
        };
        write!(f, "{}", s)
    }
}
