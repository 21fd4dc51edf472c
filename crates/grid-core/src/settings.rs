// ABOUTME: Layout engine settings handling.
// ABOUTME: Loads and saves grid capacity and iteration caps from TOML files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::GRID_COLUMNS;

/// Tunables for the row layout engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Total columns available in one row
    pub grid_columns: u32,

    /// Upper bound on redistribution passes within a single row
    pub max_balance_iterations: usize,

    /// Upper bound on panel moves while splitting an overflowing row
    pub max_split_iterations: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            grid_columns: GRID_COLUMNS,
            max_balance_iterations: 100,
            max_split_iterations: 100,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid settings: {0}")]
    Invalid(&'static str),
}

impl LayoutSettings {
    /// Get the default settings path (~/.config/panel-grid/settings.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("panel-grid").join("settings.toml"))
    }

    /// Load settings from a path
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default path, or return defaults if missing or invalid
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a path
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_columns == 0 {
            return Err(SettingsError::Invalid("grid_columns must be at least 1"));
        }
        Ok(())
    }
}
