//! log4rs setup from [`LogConfig`].
//!
//! `console` logs to stdout; `syslog` logs to stderr in the usual
//! `program[pid]: level message` layout so a supervisor can forward it.

use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

use crate::config::{LogConfig, LogOutput};

const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l}):<5} {t} - {m}{n}";
const SYSLOG_PATTERN: &str = "cidr-validate[{P}]: {l} {m}{n}";

/// Build the log4rs configuration for the given settings.
pub fn build_config(config: &LogConfig) -> Result<Config, Box<dyn Error>> {
    let (target, pattern) = match config.output {
        LogOutput::Console => (Target::Stdout, CONSOLE_PATTERN),
        LogOutput::Syslog => (Target::Stderr, SYSLOG_PATTERN),
    };

    let appender = ConsoleAppender::builder()
        .target(target)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let log4rs_config = Config::builder()
        .appender(Appender::builder().build("main", Box::new(appender)))
        .build(
            Root::builder()
                .appender("main")
                .build(config.level.level_filter()),
        )?;

    Ok(log4rs_config)
}

/// Install the global logger. Can only succeed once per process.
pub fn init(config: &LogConfig) -> Result<log4rs::Handle, Box<dyn Error>> {
    let handle = log4rs::init_config(build_config(config)?)?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn test_build_config() {
        let config = LogConfig {
            level: LogLevel::Debug,
            output: LogOutput::Console,
        };
        let built = build_config(&config).expect("Error building log4rs config");
        assert_eq!(built.root().level(), log::LevelFilter::Debug);
        assert_eq!(built.appenders().len(), 1);
    }

    #[test]
    fn test_build_config_syslog() {
        let config = LogConfig {
            level: LogLevel::Error,
            output: LogOutput::Syslog,
        };
        let built = build_config(&config).expect("Error building log4rs config");
        assert_eq!(built.root().level(), log::LevelFilter::Error);
    }
}
