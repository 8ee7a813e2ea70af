#[cfg(test)]
mod tests {
    use protask::db::db::Db;
    use protask::db::projects::Projects;
    use protask::libs::error::{TrackerError, Warning};
    use protask::libs::formatter::parse_timestamp;
    use protask::libs::project::NewProject;
    use protask::libs::scope;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ProjectTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for ProjectTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("projects.db")).unwrap();
            ProjectTestContext { temp_dir, db }
        }
    }

    fn project_count(db: &Db) -> i64 {
        db.conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0)).unwrap()
    }

    fn launch() -> NewProject {
        NewProject::new("Launch", parse_timestamp("2024-06-01 17:00:00").unwrap(), "Ada", "Marketing")
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_create_then_resolve_id(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);

        let first = projects.create(&launch()).unwrap();
        let second = projects
            .create(&NewProject::new("Rebrand", parse_timestamp("2024-09-01 12:00:00").unwrap(), "Lin", "Design"))
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(projects.resolve_id("Launch").unwrap(), Some(first));
        assert_eq!(projects.resolve_id("Rebrand").unwrap(), Some(second));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_required_fields_are_validated_without_mutation(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        let due = parse_timestamp("2024-06-01 17:00:00").unwrap();

        let invalid = [
            NewProject::new("", due, "Ada", "Marketing"),
            NewProject::new("Launch", due, "", "Marketing"),
            NewProject::new("Launch", due, "Ada", ""),
        ];
        for project in &invalid {
            assert!(matches!(projects.create(project), Err(TrackerError::Validation(_))));
        }

        assert_eq!(project_count(&ctx.db), 0);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_required_fields_check_presence_only(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        let due = parse_timestamp("2024-06-01 17:00:00").unwrap();

        let id = projects.create(&NewProject::new("   ", due, " ", "\t")).unwrap();

        let stored = projects.get_details("   ").unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.owner, " ");
        assert_eq!(stored.project_type, "\t");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_duplicate_names_are_rejected(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        let id = projects.create(&launch()).unwrap();

        let err = projects.create(&launch()).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        assert!(err.to_string().contains("Launch"));

        assert_eq!(project_count(&ctx.db), 1);
        assert_eq!(projects.resolve_id("Launch").unwrap(), Some(id));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_names_are_case_sensitive(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        projects.create(&launch()).unwrap();

        assert_eq!(projects.resolve_id("launch").unwrap(), None);
        assert!(projects.create(&NewProject { name: "LAUNCH".to_string(), ..launch() }).is_ok());
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_legacy_duplicates_resolve_to_oldest(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        let id = projects.create(&launch()).unwrap();
        ctx.db
            .conn
            .execute(
                "INSERT INTO projects (project_name, project_due_date, project_owner, project_type, allowed_files, project_scope)
                 VALUES ('Launch', '2025-01-01 00:00:00', 'Bob', 'Sales', '', '')",
                [],
            )
            .unwrap();

        assert_eq!(projects.resolve_id("Launch").unwrap(), Some(id));
        assert_eq!(projects.get_details("Launch").unwrap().unwrap().owner, "Ada");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_get_details_returns_created_values(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        let new_project = launch()
            .with_scope("Ship the landing page.\nCollect 500 signups.")
            .with_allowed_files("png");
        let id = projects.create(&new_project).unwrap();

        let project = projects.get_details("Launch").unwrap().unwrap();
        assert_eq!(project.id, id);
        assert_eq!(project.name, new_project.name);
        assert_eq!(project.due_date, new_project.due_date);
        assert_eq!(project.owner, new_project.owner);
        assert_eq!(project.project_type, new_project.project_type);
        assert_eq!(project.scope, new_project.scope);
        assert_eq!(project.allowed_files, new_project.allowed_files);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_unknown_name_is_absent_not_an_error(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);

        assert_eq!(projects.resolve_id("Never created").unwrap(), None);
        assert!(projects.get_details("Never created").unwrap().is_none());
        assert!(!projects.exists("Never created").unwrap());
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_list_names_in_creation_order(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        assert!(projects.list_names().unwrap().is_empty());

        let due = parse_timestamp("2024-06-01 17:00:00").unwrap();
        for name in ["Zeta", "Alpha", "Mid"] {
            projects.create(&NewProject::new(name, due, "Ada", "Ops")).unwrap();
        }

        assert_eq!(projects.list_names().unwrap(), vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_failed_listing_is_distinct_from_empty(ctx: &mut ProjectTestContext) {
        ctx.db.conn.execute_batch("DROP TABLE formats; DROP TABLE tasks; DROP TABLE projects;").unwrap();
        let projects = Projects::new(&ctx.db);

        assert!(matches!(projects.list_names(), Err(TrackerError::Query(_))));
        assert!(matches!(projects.resolve_id("Launch"), Err(TrackerError::Query(_))));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_launch_with_missing_scope_file(ctx: &mut ProjectTestContext) {
        let missing = ctx.temp_dir.path().join("launch_scope.txt");
        let scope = scope::load(&missing).unwrap();
        assert_eq!(scope.warning, Some(Warning::ScopeNotFound(missing)));

        let projects = Projects::new(&ctx.db);
        let id = projects.create(&launch().with_scope(scope.text)).unwrap();

        assert_eq!(projects.resolve_id("Launch").unwrap(), Some(id));
        assert_eq!(projects.get_details("Launch").unwrap().unwrap().scope, "");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_projects_survive_reopening(ctx: &mut ProjectTestContext) {
        let id = Projects::new(&ctx.db).create(&launch()).unwrap();

        let reopened = Db::open(ctx.temp_dir.path().join("projects.db")).unwrap();
        assert_eq!(Projects::new(&reopened).resolve_id("Launch").unwrap(), Some(id));
    }
}
