//! quizrun settings file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `quizzes_dir`.
pub const QUIZZES_DIR_ENV: &str = "QUIZRUN_QUIZZES_DIR";

/// Top-level quizrun settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding quiz directories.
    #[serde(default = "default_quizzes_dir")]
    pub quizzes_dir: PathBuf,
    /// Fixed seed for question selection; random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_quizzes_dir() -> PathBuf {
    PathBuf::from("./quizzes")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quizzes_dir: default_quizzes_dir(),
            seed: None,
        }
    }
}

/// Load settings from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizrun.toml` in the current directory
/// 2. `~/.config/quizrun/config.toml`
///
/// `QUIZRUN_QUIZZES_DIR` overrides `quizzes_dir` from any source.
pub fn load_settings_from(path: Option<&Path>) -> Result<Settings> {
    let settings_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("settings file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizrun.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut settings = match settings_path {
        Some(path) => {
            tracing::debug!("loading settings from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings: {}", path.display()))?;
            parse_settings(&content)
                .with_context(|| format!("failed to parse settings: {}", path.display()))?
        }
        None => Settings::default(),
    };

    if let Ok(dir) = std::env::var(QUIZZES_DIR_ENV) {
        if !dir.is_empty() {
            settings.quizzes_dir = PathBuf::from(dir);
        }
    }

    Ok(settings)
}

fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizrun"))
}
