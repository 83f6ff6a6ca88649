//! Run configuration loaded from ~/.bebop/config.yaml.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::translate::Scale;

/// How the `Input` instruction reads from stdin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// One line per read; only its first byte is kept.
    #[default]
    Line,
    /// One byte per read.
    Stream,
}

/// Defaults for the command line. Every field can be overridden by a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scale: Scale,
    /// Track index to run. Track 0 of a format 1 file usually holds only tempo data.
    #[serde(default = "Config::default_track")]
    pub track: usize,
    #[serde(default)]
    pub input_mode: InputMode,
    /// Shown before each line is read in line mode.
    #[serde(default = "Config::default_prompt")]
    pub prompt: String,
}

impl Config {
    /// Load config from the standard path (~/.bebop/config.yaml).
    /// Returns None if the file doesn't exist or can't be parsed.
    pub fn load() -> Option<Self> {
        let path = default_config_path()?;
        Self::load_from(&path).ok()
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn default_track() -> usize {
        1
    }

    fn default_prompt() -> String {
        "> ".to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: Scale::default(),
            track: Self::default_track(),
            input_mode: InputMode::default(),
            prompt: Self::default_prompt(),
        }
    }
}

/// ~/.bebop/config.yaml, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".bebop").join("config.yaml"))
}
