use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted task, always owned by exactly one project.
///
/// `end` may precede `start`; no ordering is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub project_id: i64,
}
