//! Configuration management.
//!
//! One JSON file (`config.json`) in the platform data directory, read
//! with a default fallback and written pretty-printed, plus an
//! interactive setup wizard.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Title used for trackers created without an explicit category.
pub const DEFAULT_CATEGORY_TITLE: &str = "General";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    /// Category new trackers land in when none is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config { default_category: None }
    }
}

impl Config {
    /// Load the configuration file, or defaults when none exists yet.
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

    /// Interactive setup wizard, pre-filled with current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let default_category: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultCategory.to_string())
            .default(config.default_category.clone().unwrap_or_else(|| DEFAULT_CATEGORY_TITLE.to_string()))
            .interact_text()?;

        config.default_category = Some(default_category);
        Ok(config)
    }

    /// The effective default category title.
    pub fn default_category(&self) -> String {
        self.default_category.clone().unwrap_or_else(|| DEFAULT_CATEGORY_TITLE.to_string())
    }
}
