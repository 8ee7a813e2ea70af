//! Persistence layer for protask.
//!
//! A single SQLite connection ([`db::Db`]) is opened by the entry point and
//! lent to the repositories. Every write commits on its own; there are no
//! update or delete operations.
//!
//! ```rust
//! use protask::db::{db::Db, projects::Projects, tasks::Tasks};
//! use protask::libs::{formatter::parse_timestamp, project::NewProject};
//!
//! let db = Db::open_in_memory()?;
//! let due = parse_timestamp("2024-06-01 17:00:00")?;
//! let project_id = Projects::new(&db).create(&NewProject::new("Launch", due, "Ada", "Marketing"))?;
//!
//! let tasks = Tasks::new(&db);
//! tasks.create(project_id, "Draft copy", "Landing page text", "2024-05-01 09:00:00", "2024-05-03 18:00:00")?;
//! assert_eq!(tasks.list_for_project(project_id)?.len(), 1);
//! # Ok::<(), protask::libs::error::TrackerError>(())
//! ```

/// Connection lifecycle: open, commit, close.
pub mod db;

/// Versioned schema creation.
pub mod migrations;

/// Create and query operations over projects.
pub mod projects;

/// Create and query operations over tasks.
pub mod tasks;
