use std::fs::File;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use thiserror::Error;

use crate::config::LogConf;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Unknown log level \"{0}\"")]
    InvalidLevel(String),

    #[error("Log file could not be created")]
    FileNotCreated(#[source] std::io::Error),

    #[error("Logger already initialised")]
    AlreadyInitialised(#[source] log::SetLoggerError),
}

pub fn level_filter(level: &str) -> Result<LevelFilter, LogError> {
    LevelFilter::from_str(level).map_err(|_| LogError::InvalidLevel(level.to_string()))
}

// Terminal output goes to stderr, stdout carries the record
pub fn setup(conf: &LogConf) -> Result<(), LogError> {
    let level = level_filter(&conf.level)?;

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = &conf.file {
        loggers.push(WriteLogger::new(
            level,
            Config::default(),
            File::create(path).map_err(LogError::FileNotCreated)?,
        ));
    }

    CombinedLogger::init(loggers).map_err(LogError::AlreadyInitialised)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(level_filter("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(level_filter("WARN").unwrap(), LevelFilter::Warn);
        assert_eq!(level_filter("off").unwrap(), LevelFilter::Off);
        assert!(matches!(level_filter("loud"), Err(LogError::InvalidLevel(level)) if level == "loud"));
    }
}
