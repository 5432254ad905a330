//! Application controller: the main menu loop and the per-operation
//! prompt sequences.
//!
//! Each user-facing operation is a short sequential state machine: prompt,
//! validate (re-prompting on bad input), then a single repository commit
//! and an outcome message. Cancellation at any prompt aborts the whole
//! operation before the commit step, so a cancelled flow never touches the
//! store.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::input::{self, Console, LineReader, PromptValue};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskStatus, MAX_NAME_LENGTH};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;

const MENU_QUIT: i64 = 5;

/// Upper bound for id prompts. Existence is validated by lookup, not by
/// the prompt bounds.
const MAX_TASK_ID: i64 = 9999;

pub struct TaskManager<R: LineReader> {
    repository: Tasks,
    reader: R,
}

impl TaskManager<Console> {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_reader(config, Console)
    }
}

impl<R: LineReader> TaskManager<R> {
    pub fn with_reader(config: &Config, reader: R) -> Result<Self> {
        Ok(TaskManager {
            repository: Tasks::new(&config.database)?,
            reader,
        })
    }

    /// Idempotent storage setup, run once before the menu loop.
    pub fn setup(&self) -> Result<()> {
        msg_print!(Message::SettingUpDatabase);
        self.repository.setup()?;
        msg_print!(Message::SetupComplete);
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.main_menu()? {
                1 => self.add_task()?,
                2 => self.show_tasks()?,
                3 => self.update_task()?,
                4 => self.delete_task()?,
                _ => {
                    msg_print!(Message::Goodbye);
                    return Ok(());
                }
            }
        }
    }

    fn main_menu(&mut self) -> Result<i64> {
        msg_print!(Message::TaskManagerHeader, true);
        msg_print!(Message::MainMenuOptions);

        // The exit keyword at the menu prompt quits the program.
        let choice = match input::read_bounded_int(&mut self.reader, &Message::PromptMenuChoice.to_string(), 1, MENU_QUIT, false)? {
            PromptValue::Value(choice) => choice,
            _ => MENU_QUIT,
        };
        Ok(choice)
    }

    pub fn add_task(&mut self) -> Result<()> {
        msg_print!(Message::AddTaskHeader, true);
        msg_info!(Message::ExitHint);

        let name = loop {
            let value = match input::read_text(&mut self.reader, &Message::PromptTaskName.to_string())? {
                PromptValue::Cancel => return self.cancelled("Task creation"),
                PromptValue::Empty => String::new(),
                PromptValue::Value(value) => value,
            };
            if value.is_empty() {
                msg_error!(Message::TaskNameRequired);
                continue;
            }
            if value.chars().count() > MAX_NAME_LENGTH {
                msg_error!(Message::TaskNameTooLong);
                continue;
            }
            break value;
        };

        let description = match input::read_text_validated(
            &mut self.reader,
            &Message::PromptTaskDescription.to_string(),
            |value| !value.is_empty(),
            Message::TaskDescriptionRequired,
        )? {
            PromptValue::Value(value) => value,
            _ => return self.cancelled("Task creation"),
        };

        msg_print!(Message::StatusOptions, true);
        let status = match input::read_bounded_int(&mut self.reader, &Message::PromptStatusChoice.to_string(), 1, 3, true)? {
            PromptValue::Cancel => return self.cancelled("Task creation"),
            PromptValue::Empty => TaskStatus::NotStarted,
            PromptValue::Value(2) => TaskStatus::InProgress,
            PromptValue::Value(3) => TaskStatus::Completed,
            PromptValue::Value(_) => TaskStatus::NotStarted,
        };

        let mut task = Task::new(&name, &description, status);
        if self.repository.add(&mut task) {
            msg_success!(Message::TaskAdded(task.name, status.to_string()));
        } else {
            msg_error!(Message::TaskAddFailed);
        }
        Ok(())
    }

    pub fn show_tasks(&mut self) -> Result<()> {
        msg_print!(Message::TaskListHeader, true);
        msg_info!(Message::ExitHint);
        msg_print!(Message::ShowOptions);

        let filter = match input::read_bounded_int(&mut self.reader, &Message::PromptShowChoice.to_string(), 1, 2, false)? {
            PromptValue::Value(1) => TaskFilter::ByStatus(TaskStatus::ACTIVE.to_vec()),
            PromptValue::Value(_) => TaskFilter::All,
            // Leaving the read-only list is silent; there is nothing to cancel.
            _ => return Ok(()),
        };

        let tasks = self.repository.get_all(&filter);
        if tasks.is_empty() {
            msg_warning!(Message::NoTasks);
            return Ok(());
        }

        View::tasks(&tasks);
        Ok(())
    }

    pub fn update_task(&mut self) -> Result<()> {
        msg_print!(Message::UpdateTaskHeader, true);
        msg_info!(Message::ExitHint);

        let active = self.repository.get_all(&TaskFilter::ByStatus(TaskStatus::ACTIVE.to_vec()));
        if active.is_empty() {
            msg_warning!(Message::NoTasksToUpdate);
            return Ok(());
        }
        msg_print!(Message::AvailableTasks);
        View::tasks(&active);

        let id = match input::read_bounded_int(&mut self.reader, &Message::PromptTaskIdToUpdate.to_string(), 1, MAX_TASK_ID, false)? {
            PromptValue::Value(id) => id,
            _ => return self.cancelled("Task update"),
        };

        let task = match self.repository.get_by_id(id) {
            Some(task) => task,
            None => {
                msg_error!(Message::TaskNotFound);
                return Ok(());
            }
        };

        // A completed task cannot be reverted, so only the two forward
        // states are offered.
        msg_print!(Message::NewStatusOptions, true);
        let status = match input::read_bounded_int(&mut self.reader, &Message::PromptNewStatusChoice.to_string(), 1, 2, false)? {
            PromptValue::Value(1) => TaskStatus::InProgress,
            PromptValue::Value(_) => TaskStatus::Completed,
            PromptValue::Empty | PromptValue::Cancel => return self.cancelled("Task update"),
        };

        if self.repository.update_status(id, status) {
            msg_success!(Message::TaskStatusUpdated(task.name, status.to_string()));
        } else {
            msg_error!(Message::TaskUpdateFailed);
        }
        Ok(())
    }

    pub fn delete_task(&mut self) -> Result<()> {
        msg_print!(Message::DeleteTaskHeader, true);
        msg_info!(Message::ExitHint);

        let tasks = self.repository.get_all(&TaskFilter::All);
        if tasks.is_empty() {
            msg_warning!(Message::NoTasksToDelete);
            return Ok(());
        }
        msg_print!(Message::AvailableTasks);
        View::tasks(&tasks);

        let id = match input::read_bounded_int(&mut self.reader, &Message::PromptTaskIdToDelete.to_string(), 1, MAX_TASK_ID, false)? {
            PromptValue::Value(id) => id,
            _ => return self.cancelled("Task deletion"),
        };

        let task = match self.repository.get_by_id(id) {
            Some(task) => task,
            None => {
                msg_error!(Message::TaskNotFound);
                return Ok(());
            }
        };

        // Only an explicit yes deletes; anything else backs out.
        let confirmed = match input::read_text(&mut self.reader, &Message::PromptConfirmDelete(task.name.clone()).to_string())? {
            PromptValue::Value(answer) => answer.eq_ignore_ascii_case("y"),
            _ => false,
        };
        if !confirmed {
            return self.cancelled("Deletion");
        }

        if self.repository.delete(id) {
            msg_success!(Message::TaskDeleted(task.name));
        } else {
            msg_error!(Message::TaskDeleteFailed);
        }
        Ok(())
    }

    fn cancelled(&self, operation: &str) -> Result<()> {
        msg_print!(Message::OperationCancelled(operation.to_string()));
        Ok(())
    }
}
