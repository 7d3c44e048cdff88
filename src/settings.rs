//! User settings stored as settings.json in the app data directory

use crate::constants::SETTINGS_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Side panel holding the planet / trade route lists
    pub list_panel_width: f32,

    // Paths
    pub data_folder: Option<String>,
    pub last_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            list_panel_width: 280.0,
            data_folder: None,
            last_file: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), SettingsError> {
        let path = data_dir.join(SETTINGS_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|source| SettingsError::Write { path, source })?;
        debug!("Settings saved");
        Ok(())
    }

    pub fn data_folder_path(&self) -> Option<PathBuf> {
        self.data_folder.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1200.0),
            window_h: Some(700.0),
            data_folder: Some("/games/eaw/Data".to_string()),
            ..Settings::default()
        };
        settings.save(dir.path()).unwrap();

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded, settings);
        assert_eq!(loaded.data_folder_path(), Some(PathBuf::from("/games/eaw/Data")));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn unknown_and_missing_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "last_file": "campaign.xml", "something_else": 3 }"#,
        )
        .unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.last_file.as_deref(), Some("campaign.xml"));
        assert_eq!(loaded.list_panel_width, 280.0);
    }

    #[test]
    fn save_into_missing_directory_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Settings::default().save(&missing).unwrap_err();
        assert!(matches!(err, SettingsError::Write { .. }));
    }
}
