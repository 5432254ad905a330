//! Display implementation for taskdesk application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! on the terminal. All user-facing wording lives here, in one place, so
//! prompts, errors, and notices stay consistent across the application.

use super::types::Message;
use crate::libs::task::MAX_NAME_LENGTH;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SCREEN HEADERS ===
            Message::TaskManagerHeader => "_____Task Manager_____".to_string(),
            Message::AddTaskHeader => "_____Add Task_____".to_string(),
            Message::TaskListHeader => "_____Task List_____".to_string(),
            Message::UpdateTaskHeader => "_____Update Task_____".to_string(),
            Message::DeleteTaskHeader => "_____Delete Task_____".to_string(),

            // === MENUS & HINTS ===
            Message::MainMenuOptions => {
                "1. Add task\n2. Show tasks\n3. Update task\n4. Delete task\n5. Exit program".to_string()
            }
            Message::StatusOptions => "Select task status:\n1. Not started (default)\n2. In progress\n3. Completed".to_string(),
            Message::NewStatusOptions => "Select new status:\n1. In progress\n2. Completed".to_string(),
            Message::ShowOptions => {
                "1. Show active tasks only (Not started and In progress)\n2. Show all tasks including completed ones".to_string()
            }
            Message::AvailableTasks => "Available tasks:".to_string(),
            Message::ExitHint => "Type 'exit' at any prompt to return to main menu".to_string(),
            Message::OperationCancelled(operation) => format!("{} cancelled.", operation),

            // === PROMPTS ===
            Message::PromptMenuChoice => "Select option (1-5)".to_string(),
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptStatusChoice => "Enter choice (1-3, or press Enter for default)".to_string(),
            Message::PromptNewStatusChoice => "Enter choice (1-2)".to_string(),
            Message::PromptShowChoice => "Select option (1-2)".to_string(),
            Message::PromptTaskIdToUpdate => "Enter the ID of the task to update".to_string(),
            Message::PromptTaskIdToDelete => "Enter the ID of the task to delete".to_string(),
            Message::PromptConfirmDelete(name) => format!("Are you sure you want to delete task '{}'? (y/n)", name),
            Message::PromptDatabaseFile => "Database file name".to_string(),

            // === VALIDATION ERRORS ===
            Message::TaskNameRequired => "Task name is required. Please enter a valid name.".to_string(),
            Message::TaskNameTooLong => format!("Task name too long. Maximum length is {} characters.", MAX_NAME_LENGTH),
            Message::TaskDescriptionRequired => "Task description is required. Please enter a valid description.".to_string(),
            Message::InvalidNumber => "Please enter a valid number.".to_string(),
            Message::InvalidChoice(range) => format!("Please select a valid option ({})", range),

            // === TASK MESSAGES ===
            Message::TaskAdded(name, status) => format!("Task '{}' added successfully with status '{}'.", name, status),
            Message::TaskStatusUpdated(name, status) => format!("Task '{}' updated to '{}'.", name, status),
            Message::TaskDeleted(name) => format!("Task '{}' deleted successfully.", name),
            Message::TaskNotFound => "Task not found. Please enter a valid ID.".to_string(),
            Message::TaskAddFailed => "Failed to add task. Please try again.".to_string(),
            Message::TaskUpdateFailed => "Failed to update task. Please try again.".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task. Please try again.".to_string(),
            Message::NoTasks => "No tasks found. Please add some tasks first.".to_string(),
            Message::NoTasksToUpdate => "No tasks available for update.".to_string(),
            Message::NoTasksToDelete => "No tasks available to delete.".to_string(),

            // === DATABASE MESSAGES ===
            Message::SettingUpDatabase => "Setting up database...".to_string(),
            Message::DatabaseReady(path) => format!("Database '{}' created or already exists", path),
            Message::TasksTableReady => "Tasks table created or already exists".to_string(),
            Message::SetupComplete => "Task Manager is ready!".to_string(),
            Message::Goodbye => "Exiting Task Manager. Goodbye!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigModuleDatabase => "Database configuration".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found. Run 'taskdesk init' to create it.".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
        };
        write!(f, "{}", text)
    }
}
