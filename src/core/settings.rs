//! Application settings
//!
//! Read once at startup from
//! `<config dir>/UI2Py Converter/settings.json`. The file is optional and is
//! never written by the application.

use gpui::Global;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Compiler invoked when no settings file overrides it
pub const DEFAULT_UIC_COMMAND: &str = "pyside6-uic";
/// Maximum length of a failure message shown in the status area
pub const DEFAULT_MESSAGE_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppSettings {
    /// Compiler executable name (looked up on PATH) or path
    #[serde(default = "default_uic_command")]
    pub uic_command: String,
    /// Failure messages are truncated to this many characters
    #[serde(default = "default_message_limit")]
    pub message_limit: usize,
}

fn default_uic_command() -> String {
    DEFAULT_UIC_COMMAND.to_string()
}

fn default_message_limit() -> usize {
    DEFAULT_MESSAGE_LIMIT
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            uic_command: default_uic_command(),
            message_limit: default_message_limit(),
        }
    }
}

impl Global for AppSettings {}

impl AppSettings {
    const SETTINGS_FILE: &'static str = "settings.json";

    /// `<config dir>/UI2Py Converter/settings.json`
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("UI2Py Converter").join(Self::SETTINGS_FILE))
    }

    /// Load settings from disk, or return defaults if absent or invalid
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            log::debug!("No config directory, using default settings");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::debug!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Err("Settings file not found".to_string());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings: {}", e))?;

        let settings: Self = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse settings: {}", e))?;

        if settings.uic_command.trim().is_empty() {
            return Err("uic_command must not be empty".to_string());
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.uic_command, "pyside6-uic");
        assert_eq!(settings.message_limit, 200);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "uic_command": "pyside2-uic" }"#).unwrap();

        let settings = AppSettings::load_from(&path).unwrap();
        assert_eq!(settings.uic_command, "pyside2-uic");
        assert_eq!(settings.message_limit, DEFAULT_MESSAGE_LIMIT);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(AppSettings::load_from(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_json_and_empty_command() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        std::fs::write(&path, "{ not json").unwrap();
        assert!(AppSettings::load_from(&path).is_err());

        std::fs::write(&path, r#"{ "uic_command": "  " }"#).unwrap();
        assert!(AppSettings::load_from(&path).is_err());
    }
}
