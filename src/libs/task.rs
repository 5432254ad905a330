//! Task entity and status enumeration.
//!
//! A task is a unit of tracked work: a name, a free-form description, a
//! status drawn from a closed three-state enumeration, and a creation
//! timestamp assigned once when the task is built. The storage id is
//! populated by the repository on insert and never changes afterwards.

use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum task name length in characters, matching the column capacity.
pub const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: NaiveDateTime,
}

impl Task {
    pub fn new(name: &str, description: &str, status: TaskStatus) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            status,
            created_at: Local::now().naive_local(),
        }
    }
}

/// Closed set of task states. Persisted as the display text, so the
/// database column always holds one of exactly three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Statuses considered active: not yet completed.
    pub const ACTIVE: [TaskStatus; 2] = [TaskStatus::NotStarted, TaskStatus::InProgress];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not started",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored status cell holds text outside the enumeration.
#[derive(Debug, Error)]
#[error("unknown task status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not started" => Ok(TaskStatus::NotStarted),
            "In progress" => Ok(TaskStatus::InProgress),
            "Completed" => Ok(TaskStatus::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ByStatus(Vec<TaskStatus>),
}
