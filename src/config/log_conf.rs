//! The two log settings and how they are read and printed.
//!
//! Each option field knows how to parse its value from a command-line
//! argument or a JSON value and how to render it back to text.

use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use crate::error::{CidrError, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

impl FromStr for LogLevel {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| {
                log::error!("Unknown log level: '{}'", s);
                CidrError::invalid(Field::LogLevel, s)
            })
    }
}

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogOutput {
    Syslog,
    Console,
}

impl LogOutput {
    pub const ALL: [LogOutput; 2] = [LogOutput::Syslog, LogOutput::Console];

    pub fn as_str(self) -> &'static str {
        match self {
            LogOutput::Syslog => "syslog",
            LogOutput::Console => "console",
        }
    }
}

impl FromStr for LogOutput {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogOutput::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| {
                log::error!("Unknown log output: '{}'", s);
                CidrError::invalid(Field::LogOutput, s)
            })
    }
}

/// Which setting an option field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Level,
    Output,
}

/// A value of one of the log settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogSetting {
    Level(LogLevel),
    Output(LogOutput),
}

impl LogSetting {
    pub fn kind(&self) -> SettingKind {
        match self {
            LogSetting::Level(_) => SettingKind::Level,
            LogSetting::Output(_) => SettingKind::Output,
        }
    }

    pub fn render(&self) -> &'static str {
        match self {
            LogSetting::Level(l) => l.as_str(),
            LogSetting::Output(o) => o.as_str(),
        }
    }
}

impl fmt::Display for LogSetting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.render())
    }
}

/// A named configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionField {
    pub name: &'static str,
    pub kind: SettingKind,
}

pub const LOG_LEVEL: OptionField = OptionField {
    name: "log.level",
    kind: SettingKind::Level,
};

pub const LOG_OUTPUT: OptionField = OptionField {
    name: "log.output",
    kind: SettingKind::Output,
};

/// All log option fields, in print order.
pub static LOG_FIELDS: [OptionField; 2] = [LOG_LEVEL, LOG_OUTPUT];

impl OptionField {
    fn value_field(&self) -> Field {
        match self.kind {
            SettingKind::Level => Field::LogLevel,
            SettingKind::Output => Field::LogOutput,
        }
    }

    /// Parse the value of this option from command-line text.
    pub fn parse_argv(&self, text: &str) -> Result<LogSetting, CidrError> {
        match self.kind {
            SettingKind::Level => text.parse().map(LogSetting::Level),
            SettingKind::Output => text.parse().map(LogSetting::Output),
        }
    }

    /// Parse the value of this option from JSON, which must be a string.
    pub fn parse_json(&self, json: &serde_json::Value) -> Result<LogSetting, CidrError> {
        match json.as_str() {
            Some(text) => self.parse_argv(text),
            None => {
                log::error!("The '{}' element is not a JSON string.", self.name);
                Err(CidrError::invalid(self.value_field(), &json.to_string()))
            }
        }
    }

    /// The accepted values, e.g. `syslog|console`.
    pub fn arg_doc(&self) -> String {
        match self.kind {
            SettingKind::Level => LogLevel::ALL.iter().map(|l| l.as_str()).join("|"),
            SettingKind::Output => LogOutput::ALL.iter().map(|o| o.as_str()).join("|"),
        }
    }

    /// Log `name: value` at info level.
    pub fn print(&self, value: &LogSetting) {
        log::info!("{}: {}", self.name, value);
    }
}
