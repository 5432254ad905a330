//! Configuration management.
//!
//! The application reads its storage connection parameters from a JSON file
//! in the platform application-data directory. Unlike most settings files,
//! this one is not optional: the tracker refuses to start without it, and
//! the `init` subcommand exists to create it interactively.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Storage connection parameters.
///
/// `file` is the database file name; it is resolved inside the platform
/// data directory unless `dir` overrides the location.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DbConfig {
    pub file: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            file: "tasks.db".to_string(),
            dir: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub database: DbConfig,
}

impl Config {
    /// Reads the configuration file.
    ///
    /// A missing file is an error: connection parameters must be supplied
    /// before the tracker can run.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Err(msg_error_anyhow!(Message::ConfigFileNotFound));
        }

        let config_str = fs::read_to_string(config_file_path)?;
        match serde_json::from_str(&config_str) {
            Ok(config) => Ok(config),
            Err(e) => {
                msg_debug!(format!("Config parse failed: {}", e));
                msg_bail_anyhow!(Message::ConfigParseError)
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults so re-running `init` is a
    /// cheap way to adjust a single setting.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleDatabase);
        let file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabaseFile.to_string())
            .default(current.database.file.clone())
            .interact_text()?;

        Ok(Config {
            database: DbConfig {
                file,
                dir: current.database.dir,
            },
        })
    }
}
