//! JSON file backed settings store.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use memo_core::Settings;

use crate::error::ApiError;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<SettingsError> for ApiError {
    fn from(e: SettingsError) -> Self {
        ApiError::Settings(e.to_string())
    }
}

/// Reads and writes the user settings file.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load settings, falling back to defaults when the file is missing or unusable.
    pub async fn load(&self) -> Settings {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No settings file at {}", self.path.display());
                return Settings::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read settings {}: {}", self.path.display(), e);
                return Settings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", self.path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid settings {}: {}", self.path.display(), e);
                Settings::default()
            }
        }
    }

    /// Persist settings as pretty-printed JSON.
    pub async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(settings)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| SettingsError::Write {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| SettingsError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
