#[derive(Debug, Clone)]
pub enum Message {
    // === SCREEN HEADERS ===
    TaskManagerHeader,
    AddTaskHeader,
    TaskListHeader,
    UpdateTaskHeader,
    DeleteTaskHeader,

    // === MENUS & HINTS ===
    MainMenuOptions,
    StatusOptions,
    NewStatusOptions,
    ShowOptions,
    AvailableTasks,
    ExitHint,
    OperationCancelled(String),

    // === PROMPTS ===
    PromptMenuChoice,
    PromptTaskName,
    PromptTaskDescription,
    PromptStatusChoice,
    PromptNewStatusChoice,
    PromptShowChoice,
    PromptTaskIdToUpdate,
    PromptTaskIdToDelete,
    PromptConfirmDelete(String),
    PromptDatabaseFile,

    // === VALIDATION ERRORS ===
    TaskNameRequired,
    TaskNameTooLong,
    TaskDescriptionRequired,
    InvalidNumber,
    InvalidChoice(String),

    // === TASK MESSAGES ===
    TaskAdded(String, String),
    TaskStatusUpdated(String, String),
    TaskDeleted(String),
    TaskNotFound,
    TaskAddFailed,
    TaskUpdateFailed,
    TaskDeleteFailed,
    NoTasks,
    NoTasksToUpdate,
    NoTasksToDelete,

    // === DATABASE MESSAGES ===
    SettingUpDatabase,
    DatabaseReady(String),
    TasksTableReady,
    SetupComplete,
    Goodbye,

    // === CONFIGURATION MESSAGES ===
    ConfigModuleDatabase,
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
}
