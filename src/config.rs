use std::{env, fs};

use log::debug;
use serde_derive::Deserialize;
use thiserror::Error;

use crate::enums::output_format::OutputFormat;
use crate::enums::source_kind::SourceKind;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConf,
    pub source: SourceConf,
    pub output: OutputConf,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct LogConf {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SourceConf {
    pub kind: SourceKind,
    pub cpuinfo: String,
    pub device_tree_revision: String,
    pub device_tree_model: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct OutputConf {
    pub format: OutputFormat,
}

impl Default for LogConf {
    fn default() -> Self {
        LogConf {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Default for SourceConf {
    fn default() -> Self {
        SourceConf {
            kind: SourceKind::Auto,
            cpuinfo: "/proc/cpuinfo".to_string(),
            device_tree_revision: "/proc/device-tree/system/linux,revision".to_string(),
            device_tree_model: "/proc/device-tree/model".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config File could not be found")]
    ConfigNotFound(#[source] std::io::Error),

    #[error("Config File could not be parsed: {0}")]
    ParsingError(#[source] toml::de::Error),

    #[error("Env variable could not be found")]
    EnvVarNotFound(#[source] std::env::VarError),
}

impl Config {
    pub fn from_any() -> Result<Self, ConfigError> {
        //Try to read from path env var
        match Self::from_env_path() {
            Ok(config) => {
                debug!("Loaded config from env path");
                return Ok(config);
            }
            // Unparseable config at an explicit path is fatal
            Err(error @ ConfigError::ParsingError(_)) => return Err(error),
            Err(error) => {
                debug!("Could not load config from env path: {}", error);
            }
        }

        //Try to read default path, otherwise run with built-in defaults
        match Self::from_default_path() {
            Ok(config) => {
                debug!("Loaded config from default path");
                Ok(config)
            }
            Err(ConfigError::ConfigNotFound(error)) => {
                debug!("No config file ({}), using defaults", error);
                Ok(Config::default())
            }
            Err(error) => Err(error),
        }
    }

    // Read Config from default path
    pub fn from_default_path() -> Result<Self, ConfigError> {
        Self::from_file_path("config.toml")
    }

    // Read Config from path in CONFIG_LOCATION env variable
    pub fn from_env_path() -> Result<Self, ConfigError> {
        let path = env::var("CONFIG_LOCATION").map_err(ConfigError::EnvVarNotFound)?;
        Self::from_file_path(&path)
    }

    // Read and Parse Config from path
    pub fn from_file_path(path: &str) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(ConfigError::ConfigNotFound)?;

        Self::from_toml(&data)
    }

    pub fn from_toml(data: &str) -> Result<Self, ConfigError> {
        toml::from_str(data).map_err(ConfigError::ParsingError)
    }
}
