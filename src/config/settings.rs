//! User settings for EEA
//!
//! A small JSON config: where the `*.keys` files live and the defaults used
//! when generating new keys.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::EeaPaths;
use crate::error::EeaError;

/// User settings for EEA
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Directory to search for `*.keys` files in; defaults to the keys
    /// directory under the EEA base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_dir: Option<PathBuf>,

    /// Default key size in bits for `eea keys generate`
    #[serde(default = "default_key_bits")]
    pub default_key_bits: usize,

    /// Default number of keys for `eea keys generate`
    #[serde(default = "default_key_count")]
    pub default_key_count: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_key_bits() -> usize {
    512
}

fn default_key_count() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            keys_dir: None,
            default_key_bits: default_key_bits(),
            default_key_count: default_key_count(),
        }
    }
}

impl Settings {
    /// The directory `*.keys` files are kept in, honoring the override
    pub fn keys_dir(&self, paths: &EeaPaths) -> PathBuf {
        self.keys_dir
            .clone()
            .unwrap_or_else(|| paths.default_keys_dir())
    }

    /// Load settings from disk, or create default settings if the file
    /// doesn't exist yet
    pub fn load_or_create(paths: &EeaPaths) -> Result<Self, EeaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| EeaError::Config(format!("failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| EeaError::Config(format!("failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EeaPaths) -> Result<(), EeaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| EeaError::Config(format!("failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| EeaError::Config(format!("failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_key_bits, 512);
        assert_eq!(settings.default_key_count, 3);
        assert!(settings.keys_dir.is_none());
    }

    #[test]
    fn test_keys_dir_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EeaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.keys_dir(&paths), temp_dir.path().join("keys"));

        settings.keys_dir = Some(PathBuf::from("/somewhere/else"));
        assert_eq!(settings.keys_dir(&paths), PathBuf::from("/somewhere/else"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EeaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_key_bits = 1024;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_key_bits, 1024);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EeaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_key_count, 3);
    }
}
