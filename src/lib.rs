//! # Protask - project and task tracking
//!
//! A command-line utility for planning projects and scheduling the tasks
//! under them, backed by a local SQLite database.
//!
//! ## Features
//!
//! - **Projects**: name, owner, type, due date, allowed file format and a
//!   scope brief loaded from a text file
//! - **Tasks**: named units of work with a start and end, scoped to one project
//! - **Lookup by name**: projects are selected by their human-facing name
//! - **Migrations**: the schema is created and upgraded automatically
//!
//! ## Usage
//!
//! ```rust,no_run
//! use protask::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
