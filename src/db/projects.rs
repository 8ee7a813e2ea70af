//! Project repository: create and query over the `projects` table.
//!
//! Projects are looked up by their human-facing name. The schema does not
//! declare `project_name` unique, so uniqueness is checked here at create
//! time; rows that already share a name resolve to the oldest one.
//!
//! ```rust
//! use protask::db::{db::Db, projects::Projects};
//! use protask::libs::{formatter::parse_timestamp, project::NewProject};
//!
//! let db = Db::open_in_memory()?;
//! let projects = Projects::new(&db);
//! let due = parse_timestamp("2024-06-01 17:00:00")?;
//! let id = projects.create(&NewProject::new("Launch", due, "Ada", "Marketing"))?;
//! assert_eq!(projects.resolve_id("Launch")?, Some(id));
//! # Ok::<(), protask::libs::error::TrackerError>(())
//! ```

use super::db::Db;
use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::formatter::format_timestamp;
use crate::libs::messages::Message;
use crate::libs::project::{NewProject, Project};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_PROJECT_NAMES: &str = "SELECT project_name FROM projects ORDER BY project_id";
const INSERT_PROJECT: &str = "INSERT INTO projects (project_name, project_due_date, project_owner, project_type, allowed_files, project_scope) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_PROJECT_ID_BY_NAME: &str = "SELECT project_id FROM projects WHERE project_name = ?1 ORDER BY project_id LIMIT 1";
const SELECT_PROJECT_BY_NAME: &str = "SELECT project_id, project_name, project_due_date, project_owner, project_type, allowed_files, project_scope
    FROM projects
    WHERE project_name = ?1
    ORDER BY project_id
    LIMIT 1";

pub struct Projects<'a> {
    conn: &'a Connection,
}

impl<'a> Projects<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Names of all projects, oldest first.
    pub fn list_names(&self) -> TrackerResult<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_PROJECT_NAMES).map_err(TrackerError::Query)?;
        let names = stmt
            .query_map([], |row| row.get(0))
            .map_err(TrackerError::Query)?
            .collect::<Result<Vec<String>, _>>()
            .map_err(TrackerError::Query)?;

        Ok(names)
    }

    /// Inserts a project and returns its generated identifier.
    ///
    /// Name, owner and type must be present and the name must not be in
    /// use yet. Both checks run before anything is written.
    pub fn create(&self, project: &NewProject) -> TrackerResult<i64> {
        if [&project.name, &project.owner, &project.project_type].iter().any(|field| field.is_empty()) {
            return Err(TrackerError::validation(Message::ProjectRequiredFields.to_string()));
        }
        if self.exists(&project.name)? {
            return Err(TrackerError::validation(Message::ProjectNameTaken(project.name.clone()).to_string()));
        }

        self.conn
            .execute(
                INSERT_PROJECT,
                params![
                    project.name,
                    format_timestamp(&project.due_date),
                    project.owner,
                    project.project_type,
                    project.allowed_files,
                    project.scope
                ],
            )
            .map_err(TrackerError::Persistence)?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(project_id = id, name = %project.name, "project created");

        Ok(id)
    }

    /// Identifier of the project with exactly this name, if any.
    pub fn resolve_id(&self, name: &str) -> TrackerResult<Option<i64>> {
        self.conn
            .query_row(SELECT_PROJECT_ID_BY_NAME, params![name], |row| row.get(0))
            .optional()
            .map_err(TrackerError::Query)
    }

    /// Whether a project with exactly this name is stored.
    pub fn exists(&self, name: &str) -> TrackerResult<bool> {
        Ok(self.resolve_id(name)?.is_some())
    }

    /// Every attribute of the named project, or `None` when absent.
    pub fn get_details(&self, name: &str) -> TrackerResult<Option<Project>> {
        self.conn
            .query_row(SELECT_PROJECT_BY_NAME, params![name], map_project)
            .optional()
            .map_err(TrackerError::Query)
    }
}

fn map_project(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        due_date: row.get(2)?,
        owner: row.get(3)?,
        project_type: row.get(4)?,
        allowed_files: row.get(5)?,
        scope: row.get(6)?,
    })
}
