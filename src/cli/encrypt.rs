//! Encryption CLI commands
//!
//! Encrypts files, directory trees, and text strings. Keys come from a
//! sealed keys file, or from a fresh ghost-mode set that is printed once and
//! never stored.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::config::{paths::EeaPaths, settings::Settings};
use crate::crypto::gen_keys;
use crate::error::{EeaError, EeaResult};
use crate::storage::file_io;
use crate::vault::{store::VAULT_EXT, VaultStore};

use super::keys::unseal_selected;
use super::ARTIFACT_EXT;

/// Arguments shared by every encryption target
#[derive(Args)]
pub struct EncryptArgs {
    #[command(subcommand)]
    pub target: EncryptTarget,

    /// Keys file to use; optional when only one exists
    #[arg(long, global = true)]
    pub keys: Option<String>,

    /// Ghost mode: generate one-time keys, print them, store nothing
    #[arg(long, global = true)]
    pub ghost: bool,
}

/// What to encrypt
#[derive(Subcommand)]
pub enum EncryptTarget {
    /// Encrypt a single file, writing `<file>.eea` next to it
    File {
        path: PathBuf,

        /// Keep the plaintext file instead of removing it
        #[arg(long)]
        keep: bool,

        /// Write the artifact here instead of `<file>.eea`
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Encrypt every file under a directory, recursively
    Dir {
        path: PathBuf,

        /// Keep the plaintext files instead of removing them
        #[arg(long)]
        keep: bool,
    },

    /// Encrypt a text string (read from stdin when omitted) and print it
    Text { text: Option<String> },
}

/// Handle encryption commands
pub fn handle_encrypt_command(
    paths: &EeaPaths,
    settings: &Settings,
    args: EncryptArgs,
) -> EeaResult<()> {
    let keys = if args.ghost {
        ghost_keys(settings)?
    } else {
        let store = VaultStore::new(settings.keys_dir(paths));
        unseal_selected(&store, args.keys.as_deref())?
    };

    match args.target {
        EncryptTarget::File { path, keep, output } => {
            encrypt_file(&path, output.as_deref(), keep, &keys)
        }
        EncryptTarget::Dir { path, keep } => encrypt_dir(&path, keep, &keys),
        EncryptTarget::Text { text } => encrypt_text(text, &keys),
    }
}

/// Generate a one-time key set and print it for the user to record.
fn ghost_keys(settings: &Settings) -> EeaResult<Vec<String>> {
    let keys = gen_keys(settings.default_key_bits, settings.default_key_count)?;

    println!("Encrypting with the following keys (record them; they are not stored anywhere):");
    for key in &keys {
        println!("  {}", key);
    }
    println!();

    Ok(keys)
}

fn encrypt_file(
    path: &Path,
    output: Option<&Path>,
    keep: bool,
    keys: &[String],
) -> EeaResult<()> {
    if has_extension(path, ARTIFACT_EXT) {
        return Err(EeaError::InvalidInput(format!(
            "{} already ends in .{}",
            path.display(),
            ARTIFACT_EXT
        )));
    }

    let data = file_io::read_bytes(path)?;
    if data.is_empty() {
        return Err(EeaError::InvalidInput(format!(
            "{} is empty, nothing to encrypt",
            path.display()
        )));
    }

    let artifact = crate::crypto::encrypt(&data, keys)?;
    let out_path = match output {
        Some(out) => out.to_path_buf(),
        None => artifact_path(path),
    };

    file_io::write_bytes(artifact.as_bytes(), &out_path)?;
    if !keep {
        file_io::remove_file(path)?;
    }

    println!("Encrypted {} -> {}", path.display(), out_path.display());
    Ok(())
}

fn encrypt_dir(dir: &Path, keep: bool, keys: &[String]) -> EeaResult<()> {
    if !dir.is_dir() {
        return Err(EeaError::InvalidInput(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    collect_files(dir, &mut files)?;

    let mut encrypted = 0usize;
    for path in files {
        // Leave artifacts and keys files alone
        if has_extension(&path, ARTIFACT_EXT) || has_extension(&path, VAULT_EXT) {
            continue;
        }
        if file_io::read_bytes(&path)?.is_empty() {
            println!("Skipping empty file {}", path.display());
            continue;
        }
        encrypt_file(&path, None, keep, keys)?;
        encrypted += 1;
    }

    println!("Encrypted {} file(s) under {}", encrypted, dir.display());
    Ok(())
}

fn encrypt_text(text: Option<String>, keys: &[String]) -> EeaResult<()> {
    let data = match text {
        Some(text) => text.into_bytes(),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| EeaError::Prompt(e.to_string()))?;
            buf
        }
    };

    if data.is_empty() {
        return Err(EeaError::InvalidInput("no text to encrypt".to_string()));
    }

    let artifact = crate::crypto::encrypt(&data, keys)?;
    println!("{}", artifact);
    Ok(())
}

/// The artifact path for a plaintext file: the same name with `.eea`
/// appended, so `notes.txt` becomes `notes.txt.eea`.
pub(crate) fn artifact_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}", ARTIFACT_EXT));
    PathBuf::from(name)
}

pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

/// Collect every regular file under `dir`, recursively.
pub(crate) fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> EeaResult<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| crate::error::FileIoError::ReadFailed {
        path: dir.display().to_string(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| crate::error::FileIoError::ReadFailed {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else if path.is_file() {
            out.push(path);
        }
    }
    Ok(())
}
