//! Domain types and shared infrastructure for protask.
//!
//! Holds the entity types the repositories read and write, the error
//! taxonomy, configuration, timestamp handling, the scope loader, and the
//! terminal presentation helpers (messages and tables).

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod project;
pub mod scope;
pub mod task;
pub mod view;
