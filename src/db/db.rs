//! Database gateway owning the connection lifecycle.
//!
//! The gateway holds at most one open connection at a time. `connect`
//! always closes whatever was open before handing out a fresh connection,
//! `close` is idempotent, and dropping the gateway releases the connection.
//! Schema setup runs outside the normal request flow on short-lived
//! administrative connections.

use crate::libs::config::DbConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) <= 255),
    description TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'Not started',
    created_at TIMESTAMP NOT NULL
)";

pub struct Db {
    path: PathBuf,
    conn: Option<Connection>,
}

impl Db {
    /// Resolves the database location from configuration. Does not connect.
    pub fn new(config: &DbConfig) -> Result<Db> {
        let path = match &config.dir {
            Some(dir) => dir.join(&config.file),
            None => DataStorage::new().get_path(&config.file)?,
        };

        Ok(Db { path, conn: None })
    }

    /// Opens a fresh connection, closing any prior one first.
    pub fn connect(&mut self) -> Result<&Connection> {
        self.close();
        let conn = Connection::open(&self.path)?;
        Ok(self.conn.insert(conn))
    }

    /// Releases the current connection, if any. Safe to call repeatedly.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_, e)) = conn.close() {
                msg_debug!(format!("Connection close failed: {}", e));
            }
        }
    }

    /// Creates the database file (and its directory) if absent, using a
    /// temporary administrative connection.
    pub fn create_database_if_missing(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let _admin = Connection::open(&self.path)?;
        msg_print!(Message::DatabaseReady(self.path.display().to_string()));
        Ok(())
    }

    /// Creates the tasks table if absent, using a temporary administrative
    /// connection.
    pub fn create_table_if_missing(&self) -> Result<()> {
        let admin = Connection::open(&self.path)?;
        admin.execute(SCHEMA_TASKS, [])?;
        msg_print!(Message::TasksTableReady);
        Ok(())
    }
}

impl Drop for Db {
    fn drop(&mut self) {
        self.close();
    }
}
