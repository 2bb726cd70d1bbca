//! Optional TOML settings file supplying defaults for each game.
//!
//! ```toml
//! [hangman]
//! lives = 8
//! endless = false
//! words = "/usr/share/dict/words"
//!
//! [magic_8_ball]
//! endless = false
//! answers = ["Yes", "No"]
//! ```
//!
//! Flags given on the command line win over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use parlor_core::DEFAULT_LIVES;
use serde::Deserialize;
use tracing::debug;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub hangman: HangmanSettings,
    pub magic_8_ball: MagicEightBallSettings,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HangmanSettings {
    pub lives: i64,
    pub endless: bool,
    pub words: Option<PathBuf>,
}

impl Default for HangmanSettings {
    fn default() -> Self {
        Self { lives: DEFAULT_LIVES, endless: false, words: None }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct MagicEightBallSettings {
    pub endless: bool,
    /// Replaces the classic twenty answers when set.
    pub answers: Option<Vec<String>>,
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "Parlor")
            .map(|proj_dirs| proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// An explicit path must load; the per-user default is only used when it exists.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading default settings");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
