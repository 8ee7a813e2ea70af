use super::db::Db;
use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::formatter::{format_timestamp, parse_timestamp};
use crate::libs::task::Task;
use rusqlite::{params, Connection};

const INSERT_TASK: &str = "INSERT INTO tasks (task_name, task_description, task_start, task_end, project_id) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TASKS_BY_PROJECT: &str = "SELECT task_id, task_name, task_description, task_start, task_end, project_id
    FROM tasks
    WHERE project_id = ?1
    ORDER BY task_id";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// Task repository: every task belongs to exactly one project.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Inserts a task under `project_id` and returns its identifier.
    ///
    /// `start` and `end` must be `YYYY-MM-DD HH:mm:ss`; they are parsed before
    /// anything is written and their order is not checked. An unknown
    /// `project_id` is rejected by the foreign key as
    /// [`TrackerError::Persistence`].
    pub fn create(&self, project_id: i64, name: &str, description: &str, start: &str, end: &str) -> TrackerResult<i64> {
        let start = parse_timestamp(start)?;
        let end = parse_timestamp(end)?;

        self.conn
            .execute(
                INSERT_TASK,
                params![name, description, format_timestamp(&start), format_timestamp(&end), project_id],
            )
            .map_err(TrackerError::Persistence)?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(task_id = id, project_id, "task created");

        Ok(id)
    }

    /// Tasks of one project, oldest first. An empty list means the project
    /// has no tasks; a failed query is an error.
    pub fn list_for_project(&self, project_id: i64) -> TrackerResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_BY_PROJECT).map_err(TrackerError::Query)?;
        let task_iter = stmt
            .query_map(params![project_id], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    start: row.get(3)?,
                    end: row.get(4)?,
                    project_id: row.get(5)?,
                })
            })
            .map_err(TrackerError::Query)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task.map_err(TrackerError::Query)?);
        }

        Ok(tasks)
    }

    /// Number of tasks across all projects.
    pub fn count(&self) -> TrackerResult<i64> {
        self.conn.query_row(COUNT_TASKS, [], |row| row.get(0)).map_err(TrackerError::Query)
    }
}
