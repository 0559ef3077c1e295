use std::{fmt, path::Path, path::PathBuf};

mod loader;
mod paths;

use crate::flags::Flags;
use loader::ConfigLoader;
pub use paths::ConfigPaths;

pub struct Config {
    paths: ConfigPaths,
}

impl Config {
    pub fn new(flags: &Flags) -> Self {
        Config {
            paths: ConfigPaths::new(flags),
        }
    }

    pub fn startup_lines(&self) -> Result<Vec<String>, ConfigError> {
        ConfigLoader::new(&self.paths).load_lines()
    }

    pub fn history_path(&self) -> Option<&Path> {
        self.paths.history_path.as_deref()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => write!(f, "{}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ConfigError {}
