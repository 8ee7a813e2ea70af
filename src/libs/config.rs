//! Static connection settings for the project store.
//!
//! The database location is read once at startup from `config.json` in the
//! platform data directory (see [`DataStorage`]). When no file exists the
//! built-in defaults are used, so the application runs without any setup.
//! Settings are not overridable per command; `protask init` rewrites the file.
//!
//! ```rust,no_run
//! use protask::libs::config::Config;
//!
//! let config = Config::read()?;
//! let path = config.database_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_DB_FILE_NAME: &str = "projects.db";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Database file name, resolved inside `directory`.
    pub file_name: String,

    /// Directory holding the database. Defaults to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            file_name: DEFAULT_DB_FILE_NAME.to_string(),
            directory: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Full path of the database file described by this configuration.
    pub fn database_path(&self) -> Result<PathBuf> {
        let database = self.database.clone().unwrap_or_default();
        match database.directory {
            Some(directory) => {
                fs::create_dir_all(&directory)?;
                Ok(directory.join(database.file_name))
            }
            None => Ok(DataStorage::new().get_path(&database.file_name)?),
        }
    }

    /// Interactive setup, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.database.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleDatabase);
        let file_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabaseFileName.to_string())
            .default(default.file_name)
            .interact_text()?;

        let directory: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabaseDirectory.to_string())
            .default(default.directory.map(|d| d.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        config.database = Some(DatabaseConfig {
            file_name,
            directory: if directory.trim().is_empty() { None } else { Some(PathBuf::from(directory.trim())) },
        });

        Ok(config)
    }
}
