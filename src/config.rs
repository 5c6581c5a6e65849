use crate::domain::ranking::DEFAULT_MINIMUM_MATCH;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid key binding {0:?}")]
    InvalidKey(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub toggle: String,
    pub history: String,
    pub bookmarks: String,
    pub quit: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            toggle: "ctrl-k".to_string(),
            history: "!".to_string(),
            bookmarks: "tab".to_string(),
            quit: "ctrl-c".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Queries shorter than this skip scoring and show the raw list.
    pub min_match: usize,
    /// Trailing-edge delay before re-ranking in command modes.
    pub debounce_ms: u64,
    pub keys: KeyConfig,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            min_match: DEFAULT_MINIMUM_MATCH,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            keys: KeyConfig::default(),
        }
    }
}

impl PaletteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        for spec in [
            &config.keys.toggle,
            &config.keys.history,
            &config.keys.bookmarks,
            &config.keys.quit,
        ] {
            parse_key(spec)?;
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `~/.config/tabpal/config.toml`, falling back to defaults when
    /// the file is missing or broken.
    pub fn load() -> Self {
        let Some(path) = config_dir().map(|dir| dir.join("config.toml")) else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Using default config");
                Self::default()
            }
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tabpal");
        path
    })
}

/// Parses bindings such as `ctrl-k`, `tab`, `!` or `alt-shift-h`.
pub fn parse_key(spec: &str) -> Result<KeyEvent, ConfigError> {
    let invalid = || ConfigError::InvalidKey(spec.to_string());
    let mut modifiers = KeyModifiers::empty();
    let mut rest = spec;
    loop {
        let lower = rest.to_ascii_lowercase();
        if let Some(stripped) = lower.strip_prefix("ctrl-") {
            modifiers |= KeyModifiers::CONTROL;
            rest = &rest[rest.len() - stripped.len()..];
        } else if let Some(stripped) = lower.strip_prefix("alt-") {
            modifiers |= KeyModifiers::ALT;
            rest = &rest[rest.len() - stripped.len()..];
        } else if let Some(stripped) = lower.strip_prefix("shift-") {
            modifiers |= KeyModifiers::SHIFT;
            rest = &rest[rest.len() - stripped.len()..];
        } else {
            break;
        }
    }

    let code = match rest.to_ascii_lowercase().as_str() {
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(invalid()),
            }
        }
    };
    Ok(KeyEvent::new(code, modifiers))
}
