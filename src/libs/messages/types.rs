/// Every piece of user-facing text, rendered by the `Display` impl in
/// `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === PROJECT MESSAGES ===
    ProjectCreated(String),
    ProjectCreateFailed(String),
    ProjectNotFound(String),
    ProjectNameTaken(String),
    ProjectRequiredFields,
    ProjectsNotFound,
    ProjectListHeader,
    ProjectListFailed(String),
    ProjectDetailsHeader(String),
    ProjectDetailsFailed(String),
    ProjectNameMissing,
    ProjectNotSelected,

    // === SCOPE MESSAGES ===
    ScopeFileNotFound(String),
    ScopeReadFailed(String),

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCreateFailed(String),
    TasksNotFoundForProject(String),
    TasksHeader(String),
    TaskListFailed(String),
    InvalidDateFormat,

    // === DATABASE MESSAGES ===
    DbConnectionFailed(String),
    ChangesCommitted,
    NothingToCommit,
    DatabaseOpened(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDatabase,

    // === PROMPTS ===
    PromptProjectName,
    PromptProjectOwner,
    PromptProjectType,
    PromptProjectDueDate,
    PromptScopeFile,
    PromptAllowedFiles,
    PromptSelectProject,
    PromptTaskName,
    PromptTaskDescription,
    PromptTaskStart,
    PromptTaskEnd,
    PromptDatabaseFileName,
    PromptDatabaseDirectory,
}
