use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::paths::{APP_NAME, ProjectPaths};

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("IO error on config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// What a form does with its own navigation entry when the host cancels it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelPolicy {
    /// Leave the stack untouched; the caller pops or clears it
    Keep,
    /// Remove the canceled form's entry
    #[default]
    PopOwn,
    /// Drop every entry; the player left the menu chain entirely
    ClearAll,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Navigation stack handling when a form is canceled
    #[serde(default)]
    pub on_cancel: CancelPolicy,

    /// Whether a rebuilt modal form pre-fills the values just submitted
    #[serde(default = "default_preserve_values")]
    pub preserve_values: bool,

    /// Text placed between a control's label and its validation error
    #[serde(default = "default_error_separator")]
    pub error_separator: String,
}

fn default_preserve_values() -> bool {
    true
}

fn default_error_separator() -> String {
    "\n".to_string()
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            on_cancel: CancelPolicy::default(),
            preserve_values: default_preserve_values(),
            error_separator: default_error_separator(),
        }
    }
}

impl FormsConfig {
    /// Default config file location
    pub fn config_path() -> Result<PathBuf, ConfigLoadError> {
        ProjectPaths::new(APP_NAME)
            .map(|paths| paths.config_file())
            .ok_or(ConfigLoadError::NoConfigDir)
    }

    /// Load from the default config file location
    pub fn load() -> Result<Self, ConfigLoadError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigLoadError> {
        if !path.exists() {
            return Err(ConfigLoadError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(target: "forms", "Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigLoadError> {
        Ok(toml::from_str(content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigLoadError> {
        let io_err = |source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;
        info!(target: "forms", "Saved config to {}", path.display());
        Ok(())
    }
}
