//! Command-line handling for the `cidr-validate` binary.

use std::error::Error;
use std::fmt;

use crate::config::{LogConfig, LOG_FIELDS};
use crate::output::ResultRow;
use crate::Prefix;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "CIDR_VALIDATE_CONFIG";

#[derive(Clone, Debug)]
pub struct UsageError(pub String);

impl Error for UsageError {}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<String>,
    /// `(option name, value)` pairs, applied in order.
    pub overrides: Vec<(String, String)>,
    pub prefixes: Vec<String>,
    pub help: bool,
}

impl CliArgs {
    /// Parse the arguments that follow the program name.
    pub fn parse<I>(args: I) -> Result<CliArgs, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                parsed.help = true;
            } else if arg == "--config" {
                let path = args
                    .next()
                    .ok_or_else(|| UsageError("--config needs a file path".to_string()))?;
                parsed.config_path = Some(path);
            } else if let Some(path) = arg.strip_prefix("--config=") {
                parsed.config_path = Some(path.to_string());
            } else if let Some(option) = arg.strip_prefix("--") {
                let (name, value) = match option.split_once('=') {
                    Some((name, value)) => (name.to_string(), value.to_string()),
                    None => {
                        let value = args
                            .next()
                            .ok_or_else(|| UsageError(format!("--{option} needs a value")))?;
                        (option.to_string(), value)
                    }
                };
                parsed.overrides.push((name, value));
            } else {
                parsed.prefixes.push(arg);
            }
        }

        if !parsed.help && parsed.prefixes.is_empty() {
            return Err(UsageError("At least one prefix is required".to_string()));
        }
        Ok(parsed)
    }

    /// Resolve the log settings: defaults, then the config file, then overrides.
    pub fn log_config(&self, env_path: Option<String>) -> Result<LogConfig, Box<dyn Error>> {
        let mut config = match self.config_path.clone().or(env_path) {
            Some(path) => LogConfig::from_file(path)?,
            None => LogConfig::default(),
        };
        for (name, value) in &self.overrides {
            config.apply_arg(name, value)?;
        }
        Ok(config)
    }
}

pub fn usage() -> String {
    let mut text = String::from("Usage: cidr-validate [OPTIONS] PREFIX...\n\n");
    text.push_str("  PREFIX                 address/length, e.g. 192.0.2.0/24 or 2001:db8::/32\n");
    text.push_str("  --config <FILE>        JSON config file (default: $");
    text.push_str(CONFIG_ENV);
    text.push_str(")\n");
    for field in LOG_FIELDS.iter() {
        text.push_str(&format!(
            "  --{:<20} {}\n",
            format!("{}=<v>", field.name),
            field.arg_doc()
        ));
    }
    text
}

/// Validate every prefix, returning one row per input.
pub fn validate_all(prefixes: &[String]) -> Vec<ResultRow> {
    prefixes
        .iter()
        .map(|input| ResultRow {
            input: input.clone(),
            result: input.parse::<Prefix>(),
        })
        .collect()
}
