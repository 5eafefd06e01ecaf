//! Vault file storage
//!
//! Manages the `*.keys` files in the configured keys directory: listing,
//! resolving a user-supplied name to a path, and loading/saving/deleting
//! sealed vault artifacts.

use std::path::{Path, PathBuf};

use crate::error::{EeaError, EeaResult, FileIoError};
use crate::storage::file_io;

/// File extension for vault artifacts
pub const VAULT_EXT: &str = "keys";

/// Default vault filename when the user doesn't pick one
pub const DEFAULT_VAULT: &str = "keys.keys";

/// Access to the vault files under one keys directory
#[derive(Debug, Clone)]
pub struct VaultStore {
    keys_dir: PathBuf,
}

impl VaultStore {
    /// Create a store over `keys_dir` (the directory may not exist yet)
    pub fn new(keys_dir: PathBuf) -> Self {
        Self { keys_dir }
    }

    /// The directory this store reads and writes
    pub fn keys_dir(&self) -> &Path {
        &self.keys_dir
    }

    /// List every `*.keys` file in the keys directory, sorted by filename.
    ///
    /// A missing directory is just an empty store.
    pub fn list(&self) -> EeaResult<Vec<PathBuf>> {
        if !self.keys_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.keys_dir).map_err(|e| FileIoError::ReadFailed {
            path: self.keys_dir.display().to_string(),
            source: e,
        })?;

        let mut vaults: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == VAULT_EXT)
            })
            .collect();
        vaults.sort();
        Ok(vaults)
    }

    /// True if at least one vault file exists
    pub fn has_vaults(&self) -> bool {
        self.list().map(|v| !v.is_empty()).unwrap_or(false)
    }

    /// Resolve a user-supplied vault name to an existing file.
    ///
    /// Accepts a path to an existing file, a filename in the keys
    /// directory, or a bare name without the `.keys` extension.
    pub fn resolve(&self, name: &str) -> EeaResult<PathBuf> {
        let direct = PathBuf::from(name);
        if direct.is_file() {
            return Ok(direct);
        }

        let in_dir = self.keys_dir.join(name);
        if in_dir.is_file() {
            return Ok(in_dir);
        }

        let with_ext = self.keys_dir.join(format!("{}.{}", name, VAULT_EXT));
        if with_ext.is_file() {
            return Ok(with_ext);
        }

        Err(EeaError::InvalidInput(format!(
            "no keys file named '{}' in {}",
            name,
            self.keys_dir.display()
        )))
    }

    /// Pick the vault to use: an explicit name wins; otherwise the single
    /// existing vault file; ambiguity or absence is an error that lists the
    /// candidates.
    pub fn select(&self, explicit: Option<&str>) -> EeaResult<PathBuf> {
        if let Some(name) = explicit {
            return self.resolve(name);
        }

        let mut vaults = self.list()?;
        match vaults.len() {
            0 => Err(EeaError::InvalidInput(format!(
                "no keys files found in {}; run 'eea keys generate' first",
                self.keys_dir.display()
            ))),
            1 => Ok(vaults.remove(0)),
            _ => {
                let names: Vec<String> = vaults
                    .iter()
                    .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                    .collect();
                Err(EeaError::InvalidInput(format!(
                    "multiple keys files found, pick one with --keys: {}",
                    names.join(", ")
                )))
            }
        }
    }

    /// Load a sealed vault artifact as text.
    pub fn load(&self, path: &Path) -> EeaResult<String> {
        let bytes = file_io::read_bytes(path)?;
        String::from_utf8(bytes).map_err(|_| {
            EeaError::InvalidInput(format!(
                "{} is not a valid keys file",
                path.display()
            ))
        })
    }

    /// Save a sealed vault artifact under `filename` in the keys directory.
    ///
    /// Refuses to overwrite an existing vault unless `overwrite` is set.
    pub fn save(&self, filename: &str, sealed: &str, overwrite: bool) -> EeaResult<PathBuf> {
        let path = self.keys_dir.join(filename);
        if path.exists() && !overwrite {
            return Err(EeaError::InvalidInput(format!(
                "{} already exists; pass --force to overwrite",
                path.display()
            )));
        }
        file_io::write_bytes(sealed.as_bytes(), &path)?;
        Ok(path)
    }

    /// Delete a vault file.
    pub fn delete(&self, path: &Path) -> EeaResult<()> {
        file_io::remove_file(path)?;
        Ok(())
    }
}
