use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

const DEFAULT_LIST_NAME: &str = ".todos.txt";

fn default_status_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// List file used when none is given on the command line.
    #[serde(default)]
    pub default_file: Option<String>,
    /// How long a status message stays on screen.
    #[serde(default = "default_status_timeout_secs")]
    pub status_timeout_secs: u64,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file: None,
            status_timeout_secs: default_status_timeout_secs(),
            log_file: None,
            log_level: None,
        }
    }
}

impl Config {
    pub fn load() -> io::Result<Self> {
        let path = get_config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::parse(&content)
        } else {
            Ok(Config::default())
        }
    }

    pub fn parse(content: &str) -> io::Result<Self> {
        toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    #[must_use]
    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }

    /// Unknown level names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|s| LevelFilter::from_str(s).ok())
            .unwrap_or(LevelFilter::Info)
    }

    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_deref().map(resolve_path)
    }

    /// The list to open when no file is named on the command line:
    /// the configured default, else `$HOME/.todos.txt`, else nothing.
    #[must_use]
    pub fn list_path(&self) -> Option<PathBuf> {
        if let Some(ref file) = self.default_file {
            return Some(resolve_path(file));
        }
        get_default_list_path()
    }
}

/// Resolve a path to absolute, joining with cwd if relative.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("todos")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// `$HOME/.todos.txt`, or `None` when `HOME` is unset.
pub fn get_default_list_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_LIST_NAME))
}
