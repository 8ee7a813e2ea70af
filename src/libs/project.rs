use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted project, as read back from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub due_date: NaiveDateTime,
    pub owner: String,
    pub project_type: String,
    pub allowed_files: String,
    pub scope: String,
}

/// The attributes supplied when creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub due_date: NaiveDateTime,
    pub owner: String,
    pub project_type: String,
    pub scope: String,
    pub allowed_files: String,
}

impl NewProject {
    pub fn new(name: &str, due_date: NaiveDateTime, owner: &str, project_type: &str) -> Self {
        NewProject {
            name: name.to_string(),
            due_date,
            owner: owner.to_string(),
            project_type: project_type.to_string(),
            scope: String::new(),
            allowed_files: String::new(),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_allowed_files(mut self, allowed_files: impl Into<String>) -> Self {
        self.allowed_files = allowed_files.into();
        self
    }
}
