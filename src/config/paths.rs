//! Path management for EEA
//!
//! Provides XDG-compliant path resolution for the config file and the keys
//! directory.
//!
//! ## Path Resolution Order
//!
//! 1. `EEA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/eea` or `~/.config/eea`
//! 3. Windows: `%APPDATA%\eea`

use std::path::PathBuf;

use crate::error::EeaError;

/// Manages all paths used by EEA
#[derive(Debug, Clone)]
pub struct EeaPaths {
    /// Base directory for all EEA data
    base_dir: PathBuf,
}

impl EeaPaths {
    /// Create a new EeaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, EeaError> {
        let base_dir = if let Ok(custom) = std::env::var("EEA_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EeaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/eea/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the default keys directory (~/.config/eea/keys/)
    ///
    /// Settings can point somewhere else entirely; see
    /// [`crate::config::settings::Settings::keys_dir`].
    pub fn default_keys_dir(&self) -> PathBuf {
        self.base_dir.join("keys")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and keys directories exist
    pub fn ensure_directories(&self) -> Result<(), EeaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EeaError::Config(format!("failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.default_keys_dir())
            .map_err(|e| EeaError::Config(format!("failed to create keys directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EeaError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| EeaError::Config("could not determine home directory".into()))
        })?;
    Ok(config_base.join("eea"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EeaError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EeaError::Config("could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("eea"))
}
