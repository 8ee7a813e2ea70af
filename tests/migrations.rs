#[cfg(test)]
mod tests {
    use protask::db::db::Db;
    use protask::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn db_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("projects.db")
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert!(version > 0);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_file_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations(ctx.db_path()).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_declares_all_tables(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();

        for table in ["projects", "tasks", "designers", "assigned_designer", "formats"] {
            let count: i64 = db
                .conn
                .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1", [table], |row| {
                    row.get(0)
                })
                .unwrap();
            assert_eq!(count, 1, "missing table {}", table);
        }

        let columns: Vec<String> = db
            .conn
            .prepare("SELECT name FROM pragma_table_info('projects')")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            columns,
            vec![
                "project_id",
                "project_name",
                "project_due_date",
                "project_owner",
                "project_type",
                "allowed_files",
                "project_scope"
            ]
        );
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_only_pending_versions_are_applied(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        conn.execute_batch("DELETE FROM migrations WHERE version = 2; DROP INDEX idx_projects_name;")
            .unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);

        manager.run_migrations(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 2);
        let indexed: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'index' AND name = 'idx_projects_name'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(indexed);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 2);
    }
}
