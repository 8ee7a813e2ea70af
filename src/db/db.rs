use super::migrations::init_with_migrations;
use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;
use std::path::Path;

/// The single store connection, owned by the entry point and lent to every
/// repository for the lifetime of the process.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database file at `path`, turns on foreign-key enforcement
    /// and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> TrackerResult<Db> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(TrackerError::Connection)?;
        let db = Self::prepare(conn)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));

        Ok(db)
    }

    /// A private in-memory store with the full schema.
    pub fn open_in_memory() -> TrackerResult<Db> {
        let conn = Connection::open_in_memory().map_err(TrackerError::Connection)?;
        Self::prepare(conn)
    }

    /// Opens the file without touching its schema, for migration diagnostics.
    pub fn new_without_migrations(path: impl AsRef<Path>) -> TrackerResult<Connection> {
        Connection::open(path).map_err(TrackerError::Connection)
    }

    fn prepare(mut conn: Connection) -> TrackerResult<Db> {
        conn.pragma_update(None, "foreign_keys", true).map_err(TrackerError::Connection)?;
        init_with_migrations(&mut conn).map_err(TrackerError::Connection)?;

        Ok(Db { conn })
    }

    /// Flushes writes still pending in an open transaction.
    ///
    /// Repositories commit every write as it happens, so outside an explicit
    /// transaction there is nothing to flush and this returns `Ok(false)`.
    pub fn commit(&self) -> TrackerResult<bool> {
        if self.conn.is_autocommit() {
            tracing::debug!("commit requested with no open transaction");
            return Ok(false);
        }

        self.conn.execute_batch("COMMIT").map_err(TrackerError::Persistence)?;
        tracing::debug!("pending changes committed");
        Ok(true)
    }

    /// Releases the connection. An absent handle is a no-op.
    pub fn close(handle: Option<Db>) -> TrackerResult<()> {
        match handle {
            Some(db) => db.conn.close().map_err(|(_, err)| TrackerError::Connection(err)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_keys_are_enforced() {
        let db = Db::open_in_memory().unwrap();
        let enabled: bool = db.conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0)).unwrap();
        assert!(enabled);
    }

    #[test]
    fn commit_without_transaction_is_a_no_op() {
        let db = Db::open_in_memory().unwrap();
        assert!(!db.commit().unwrap());
    }

    #[test]
    fn commit_flushes_an_open_transaction() {
        let db = Db::open_in_memory().unwrap();
        db.conn.execute_batch("BEGIN").unwrap();
        db.conn.execute("INSERT INTO designers (designer_name) VALUES ('Grace')", []).unwrap();

        assert!(db.commit().unwrap());
        assert!(db.conn.is_autocommit());
    }

    #[test]
    fn closing_an_absent_handle_is_not_an_error() {
        assert!(Db::close(None).is_ok());
        assert!(Db::close(Some(Db::open_in_memory().unwrap())).is_ok());
    }

    #[test]
    fn unreachable_location_is_a_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("nested").join("projects.db");
        assert!(matches!(Db::open(path), Err(TrackerError::Connection(_))));
    }
}
