#[cfg(test)]
mod tests {
    use protask::libs::config::{Config, DatabaseConfig, DEFAULT_DB_FILE_NAME};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this file redirect HOME, which is process-wide.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the home/appdata directory at a fresh temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { temp_dir, _guard: guard }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_database_path(ctx: &mut ConfigTestContext) {
        let path = Config::default().database_path().unwrap();

        assert!(path.starts_with(ctx.temp_dir.path()));
        assert!(path.ends_with(DEFAULT_DB_FILE_NAME));
        assert!(path.parent().unwrap().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let directory = ctx.temp_dir.path().join("stores");
        let config = Config {
            database: Some(DatabaseConfig {
                file_name: "agency.db".to_string(),
                directory: Some(directory.clone()),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.database_path().unwrap(), directory.join("agency.db"));
        assert!(directory.exists());
    }
}
