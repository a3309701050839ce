//! Runtime configuration.
//!
//! Only the log settings are configurable. Values come from defaults, then
//! an optional JSON file, then command-line overrides:
//!
//! ```json
//! { "log": { "level": "debug", "output": "console" } }
//! ```

mod log_conf;

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::error::CidrError;

pub use log_conf::{
    LogLevel, LogOutput, LogSetting, OptionField, SettingKind, LOG_FIELDS, LOG_LEVEL, LOG_OUTPUT,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error reading config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Error parsing config JSON at {0}")]
    Json(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error(transparent)]
    Value(#[from] CidrError),

    #[error("Unknown option '{0}'")]
    UnknownOption(String),
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    log: RawLog,
}

/// Setting values are kept as JSON so each option field parses its own.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct RawLog {
    level: Option<serde_json::Value>,
    output: Option<serde_json::Value>,
}

/// The effective log settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub output: LogOutput,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: LogLevel::Warning,
            output: LogOutput::Console,
        }
    }
}

impl LogConfig {
    /// Look up an option field by its full name, e.g. `log.level`.
    pub fn find_field(name: &str) -> Option<&'static OptionField> {
        LOG_FIELDS.iter().find(|f| f.name == name)
    }

    pub fn get(&self, field: &OptionField) -> LogSetting {
        match field.kind {
            SettingKind::Level => LogSetting::Level(self.level),
            SettingKind::Output => LogSetting::Output(self.output),
        }
    }

    pub fn set(&mut self, setting: LogSetting) {
        match setting {
            LogSetting::Level(level) => self.level = level,
            LogSetting::Output(output) => self.output = output,
        }
    }

    /// Apply a command-line `name value` pair.
    pub fn apply_arg(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let field =
            Self::find_field(name).ok_or_else(|| ConfigError::UnknownOption(name.to_string()))?;
        self.set(field.parse_argv(value)?);
        Ok(())
    }

    /// Overlay the settings present in a JSON document onto `self`.
    pub fn apply_json_str(&mut self, json: &str) -> Result<(), ConfigError> {
        let de = &mut serde_json::Deserializer::from_str(json);
        let raw: RawConfig = serde_path_to_error::deserialize(de)?;

        if let Some(value) = &raw.log.level {
            self.set(LOG_LEVEL.parse_json(value)?);
        }
        if let Some(value) = &raw.log.output {
            self.set(LOG_OUTPUT.parse_json(value)?);
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<LogConfig, ConfigError> {
        let mut config = LogConfig::default();
        config.apply_json_str(json)?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<LogConfig, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Reading config file: {}", path.display());
        LogConfig::from_json_str(&json)
    }

    /// Log every option as `name: value`.
    pub fn print(&self) {
        for field in LOG_FIELDS.iter() {
            field.print(&self.get(field));
        }
    }
}
