//! Task repository: CRUD operations over the tasks table.
//!
//! Every operation runs a full connect → execute → release cycle against
//! the gateway, on success and on failure alike. Storage errors never
//! escape this layer: they are logged for diagnostics and converted into
//! benign results (`false`, an empty list, `None`), so callers only ever
//! deal in plain outcomes.

use super::db::Db;
use crate::libs::config::DbConfig;
use crate::libs::task::{Task, TaskFilter, TaskStatus};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (name, description, status, created_at) VALUES (?, ?, ?, ?)";
const SELECT_TASKS: &str = "SELECT id, name, description, status, created_at FROM tasks";
const WHERE_STATUS: &str = "WHERE status IN";
const WHERE_ID: &str = "WHERE id = ?";
const UPDATE_TASK_STATUS: &str = "UPDATE tasks SET status = ? WHERE id = ?";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?";

pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(config: &DbConfig) -> Result<Tasks> {
        Ok(Tasks { db: Db::new(config)? })
    }

    /// Runs the idempotent schema setup on the gateway. Called once at
    /// startup, before any repository operation.
    pub fn setup(&self) -> Result<()> {
        self.db.create_database_if_missing()?;
        self.db.create_table_if_missing()?;
        Ok(())
    }

    /// Inserts a task and populates its storage-assigned id.
    ///
    /// Returns `false` when no connection can be obtained or the insert is
    /// rejected, e.g. by the column capacity check on oversized names.
    pub fn add(&mut self, task: &mut Task) -> bool {
        let result = self.try_add(task);
        self.db.close();
        match result {
            Ok(id) => {
                task.id = Some(id);
                true
            }
            Err(e) => {
                msg_debug!(format!("Task insert failed: {}", e));
                false
            }
        }
    }

    /// Fetches tasks, optionally restricted to a status set, in
    /// storage-native order. Returns an empty list on storage errors.
    pub fn get_all(&mut self, filter: &TaskFilter) -> Vec<Task> {
        let result = self.try_get_all(filter);
        self.db.close();
        result.unwrap_or_else(|e| {
            msg_debug!(format!("Task fetch failed: {}", e));
            Vec::new()
        })
    }

    pub fn get_by_id(&mut self, id: i64) -> Option<Task> {
        let result = self.try_get_by_id(id);
        self.db.close();
        match result {
            Ok(task) => task,
            Err(e) => {
                msg_debug!(format!("Task lookup failed: {}", e));
                None
            }
        }
    }

    /// Sets a task's status. `true` only if exactly one row was affected.
    pub fn update_status(&mut self, id: i64, status: TaskStatus) -> bool {
        let result = self.try_update_status(id, status);
        self.db.close();
        match result {
            Ok(affected) => affected == 1,
            Err(e) => {
                msg_debug!(format!("Task update failed: {}", e));
                false
            }
        }
    }

    /// Deletes a task. `true` only if exactly one row was affected.
    pub fn delete(&mut self, id: i64) -> bool {
        let result = self.try_delete(id);
        self.db.close();
        match result {
            Ok(affected) => affected == 1,
            Err(e) => {
                msg_debug!(format!("Task delete failed: {}", e));
                false
            }
        }
    }

    fn try_add(&mut self, task: &Task) -> Result<i64> {
        let conn = self.db.connect()?;
        conn.execute(INSERT_TASK, params![task.name, task.description, task.status.as_str(), task.created_at])?;
        Ok(conn.last_insert_rowid())
    }

    fn try_get_all(&mut self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let conn = self.db.connect()?;
        let (mut stmt, params): (_, Vec<&str>) = match filter {
            TaskFilter::All => (conn.prepare(SELECT_TASKS)?, vec![]),
            TaskFilter::ByStatus(statuses) => (
                conn.prepare(&format!("{} {} ({})", SELECT_TASKS, WHERE_STATUS, vec!["?"; statuses.len()].join(", ")))?,
                statuses.iter().map(|status| status.as_str()).collect(),
            ),
        };

        let task_iter = stmt.query_map(params_from_iter(params.iter()), Self::map_row)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    fn try_get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        let conn = self.db.connect()?;
        let task = conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()?;
        Ok(task)
    }

    fn try_update_status(&mut self, id: i64, status: TaskStatus) -> Result<usize> {
        let conn = self.db.connect()?;
        Ok(conn.execute(UPDATE_TASK_STATUS, params![status.as_str(), id])?)
    }

    fn try_delete(&mut self, id: i64) -> Result<usize> {
        let conn = self.db.connect()?;
        Ok(conn.execute(DELETE_TASK, params![id])?)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        let status: String = row.get(3)?;
        let status = status
            .parse::<TaskStatus>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

        Ok(Task {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            status,
            created_at: row.get(4)?,
        })
    }
}
