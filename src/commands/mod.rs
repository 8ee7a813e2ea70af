pub mod commit;
pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod project;
pub mod task;

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the database location")]
    Init(init::InitArgs),
    #[command(about = "Create, list and inspect projects", arg_required_else_help = true)]
    Project(project::ProjectArgs),
    #[command(about = "Create and list the tasks of a project", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Commit pending changes to the database")]
    Commit,
    #[cfg(debug_assertions)]
    #[command(about = "Database migration management (debug builds only)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses the command line and runs the selected command against the
    /// configured database. The connection is opened once here and lent to
    /// the command.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let path = match cli.command {
            Commands::Init(args) => return init::cmd(args),
            _ => Config::read()?.database_path()?,
        };

        #[cfg(debug_assertions)]
        if let Commands::Migrations(args) = cli.command {
            return migrations::cmd(args, &path);
        }

        let db = match Db::open(&path) {
            Ok(db) => db,
            Err(e) => msg_bail_anyhow!(Message::DbConnectionFailed(e.to_string())),
        };

        let result = match cli.command {
            Commands::Project(args) => project::cmd(&db, args),
            Commands::Task(args) => task::cmd(&db, args),
            Commands::Commit => commit::cmd(&db),
            Commands::Init(_) => Ok(()),
            #[cfg(debug_assertions)]
            Commands::Migrations(_) => Ok(()),
        };

        Db::close(Some(db))?;
        result
    }
}
