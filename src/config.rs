//! Generator configuration (gdydoc.yaml).
//!
//! Every key is optional; the defaults match the layout of a games
//! repository, so running with no configuration at all walks
//! `resources/games` and writes to `docs/games`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DocError, Result};

/// The name of the optional configuration file.
pub const CONFIG_FILENAME: &str = "gdydoc.yaml";

/// Directories used by a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the GDY file tree.
    pub games: PathBuf,

    /// Root of the generated documentation tree.
    pub output: PathBuf,

    /// Directory sprites are resolved against.
    pub images: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            games: PathBuf::from("resources/games"),
            output: PathBuf::from("docs/games"),
            images: PathBuf::from("resources/images"),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DocError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| DocError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `gdydoc.yaml` from `dir` if it exists, else use defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
