//! Configuration management for shiftrep.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). Every module is optional so a fresh install works with
//! command-line flags alone.
//!
//! ## Modules
//!
//! - **api**: base URL of the attendance backend
//! - **report**: standard shift length used when totalling local shift files
//!
//! ## API URL resolution
//!
//! [`Config::resolve_api_url`] picks the first of: the explicit flag, the
//! `SHIFTREP_API_URL` environment variable (a `.env` file is loaded at
//! startup), the configured `api.api_url`.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use shiftrep::libs::config::Config;
//!
//! let config = Config::read()?;
//! let url = config.resolve_api_url(None);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::attendance::AttendanceConfig;
use crate::libs::messages::Message;
use crate::libs::workshift::STANDARD_SHIFT_MINUTES;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured API URL.
pub const API_URL_ENV: &str = "SHIFTREP_API_URL";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Report computation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Length of a regular shift in minutes; shorter shifts count as delay,
    /// longer ones as extra time.
    pub standard_shift_minutes: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            standard_shift_minutes: STANDARD_SHIFT_MINUTES,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<AttendanceConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        // No file yet means defaults
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

    pub fn standard_shift_minutes(&self) -> i64 {
        self.report.clone().unwrap_or_default().standard_shift_minutes
    }

    /// First non-empty of `explicit`, `SHIFTREP_API_URL` and the configured URL.
    pub fn resolve_api_url(&self, explicit: Option<&str>) -> Option<String> {
        let non_empty = |url: &String| !url.trim().is_empty();
        explicit
            .map(str::to_string)
            .filter(non_empty)
            .or_else(|| env::var(API_URL_ENV).ok().filter(non_empty))
            .or_else(|| self.api.as_ref().map(|api| api.api_url.clone()).filter(non_empty))
    }

    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            AttendanceConfig::module(),
            ConfigModule {
                key: "report".to_string(),
                name: "Report".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => config.api = Some(AttendanceConfig::init(&config.api)?),
                "report" => {
                    let default = config.report.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleReport);
                    config.report = Some(ReportConfig {
                        standard_shift_minutes: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStandardShiftMinutes.to_string())
                            .default(default.standard_shift_minutes)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
