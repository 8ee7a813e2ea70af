//! Versioned schema management for the project store.
//!
//! Every database opened through [`Db`](super::db::Db) is brought to the
//! latest schema version before any repository touches it. Applied versions
//! are recorded in a `migrations` table so reopening an up-to-date file is a
//! no-op.
//!
//! ```rust
//! use protask::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 2);
//! # Ok::<(), rusqlite::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::{params, Connection, Result, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const RECORD_MIGRATION: &str = "INSERT INTO migrations (version, name) VALUES (?1, ?2)";

const HAS_MIGRATIONS_TABLE: &str =
    "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'migrations'";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of every schema version, applied in order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the five tables of the project store.
        // designers, assigned_designer and formats are declared but not used
        // by any operation yet.
        self.add_migration(1, "create_project_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS projects (
                    project_id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                    project_name VARCHAR(100) NOT NULL,
                    project_due_date DATETIME NOT NULL,
                    project_owner VARCHAR(100) NOT NULL,
                    project_type VARCHAR(100) NOT NULL,
                    allowed_files VARCHAR(100) NOT NULL,
                    project_scope LONGTEXT NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    task_id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                    task_name VARCHAR(100) NOT NULL,
                    task_description VARCHAR(255) NOT NULL,
                    task_start DATETIME NOT NULL,
                    task_end DATETIME NOT NULL,
                    project_id INTEGER NOT NULL,
                    CONSTRAINT fk_tasks_projects
                        FOREIGN KEY (project_id)
                        REFERENCES projects (project_id)
                        ON DELETE NO ACTION
                        ON UPDATE NO ACTION
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS fk_tasks_projects_idx ON tasks(project_id)", [])?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS designers (
                    designer_id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                    designer_name VARCHAR(100) NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS assigned_designer (
                    designer_id INTEGER NOT NULL,
                    task_id INTEGER NOT NULL,
                    PRIMARY KEY (designer_id, task_id),
                    CONSTRAINT fk_assigned_designer_designers1
                        FOREIGN KEY (designer_id)
                        REFERENCES designers (designer_id)
                        ON DELETE NO ACTION
                        ON UPDATE NO ACTION,
                    CONSTRAINT fk_assigned_designer_tasks1
                        FOREIGN KEY (task_id)
                        REFERENCES tasks (task_id)
                        ON DELETE NO ACTION
                        ON UPDATE NO ACTION
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS fk_assigned_designer_tasks1_idx ON assigned_designer(task_id)", [])?;
            tx.execute(
                "CREATE INDEX IF NOT EXISTS fk_assigned_designer_designers1_idx ON assigned_designer(designer_id)",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS formats (
                    format_id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                    file_format VARCHAR(10) NOT NULL,
                    project_id INTEGER NOT NULL,
                    CONSTRAINT fk_formats_projects
                        FOREIGN KEY (project_id)
                        REFERENCES projects (project_id)
                        ON DELETE NO ACTION
                        ON UPDATE NO ACTION
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS fk_formats_projects_idx ON formats(project_id)", [])?;

            Ok(())
        });

        // Version 2: project names are the lookup key for every selection.
        self.add_migration(2, "index_project_names", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_projects_name ON projects(project_name)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Brings `conn` to the newest registered version. Pending
    /// versions share one transaction, so a failing step leaves the file at
    /// the version it had before.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let pending = self.pending_since(self.get_current_version(conn)?);
        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }
        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            Self::apply(&tx, migration).inspect_err(|e| {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
            })?;
        }
        tx.commit()?;

        msg_debug!(Message::AllMigrationsCompleted);
        Ok(())
    }

    fn pending_since(&self, version: u32) -> Vec<&Migration> {
        self.migrations.iter().filter(|m| m.version > version).collect()
    }

    fn apply(tx: &Transaction, migration: &Migration) -> Result<()> {
        msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));
        (migration.up)(tx)?;
        tx.execute(RECORD_MIGRATION, params![migration.version, migration.name])?;
        msg_debug!(Message::MigrationCompleted(migration.version));
        Ok(())
    }

    /// Highest recorded version; 0 for a file that was never migrated.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let tracked: bool = conn.query_row(HAS_MIGRATIONS_TABLE, [], |row| row.get(0))?;
        if !tracked {
            return Ok(0);
        }
        conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// `(version, name, applied_at)` for every applied migration, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}

