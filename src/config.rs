//! `Lambda.toml`, the optional developer config read by the local invoker.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [events]
//! ping = "events/ping.json"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "Lambda.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: Logging,
    /// Named events, each pointing at a JSON file
    #[serde(default)]
    pub events: BTreeMap<String, PathBuf>,
    /// Directory the file was read from; event paths resolve against it
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Logging {
    pub level: Option<log::LevelFilter>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, toml::de::Error),
    UnknownEvent(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, _) => write!(f, "can't read {}", path.display()),
            ConfigError::Parse(path, _) => write!(f, "invalid config in {}", path.display()),
            ConfigError::UnknownEvent(name) => {
                write!(f, "no event named `{}` in table [events]", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
            ConfigError::UnknownEvent(_) => None,
        }
    }
}

impl Config {
    pub fn parse(text: &str, base_dir: &Path) -> Result<Config, toml::de::Error> {
        let mut config: Config = toml::from_str(text)?;
        config.base_dir = base_dir.to_owned();
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_owned(), e))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Config::parse(&text, base_dir).map_err(|e| ConfigError::Parse(path.to_owned(), e))
    }

    /// Loads `path` when given, otherwise `Lambda.toml` from the current
    /// directory if one exists.
    pub fn discover(path: Option<&Path>) -> Result<Config, ConfigError> {
        Config::discover_in(Path::new(""), path)
    }

    /// Like [`Config::discover`], looking for the default file in `dir`.
    pub fn discover_in(dir: &Path, path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Config::load(path),
            None => {
                let default = dir.join(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Config::load(&default)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn event_path(&self, name: &str) -> Result<PathBuf, ConfigError> {
        self.events
            .get(name)
            .map(|path| self.base_dir.join(path))
            .ok_or_else(|| ConfigError::UnknownEvent(name.to_owned()))
    }
}
