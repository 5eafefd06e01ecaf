//! Decryption CLI commands
//!
//! Mirrors the encrypt side: files, directory trees, and text artifacts.
//! Ghost mode asks for the keys interactively instead of reading a keys
//! file.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::config::{paths::EeaPaths, settings::Settings};
use crate::error::{EeaError, EeaResult};
use crate::storage::file_io;
use crate::vault::VaultStore;

use super::encrypt::{collect_files, has_extension};
use super::keys::unseal_selected;
use super::{prompt, ARTIFACT_EXT};

/// Arguments shared by every decryption target
#[derive(Args)]
pub struct DecryptArgs {
    #[command(subcommand)]
    pub target: DecryptTarget,

    /// Keys file to use; optional when only one exists
    #[arg(long, global = true)]
    pub keys: Option<String>,

    /// Ghost mode: enter the keys by hand instead of using a keys file
    #[arg(long, global = true)]
    pub ghost: bool,
}

/// What to decrypt
#[derive(Subcommand)]
pub enum DecryptTarget {
    /// Decrypt a single `*.eea` file, restoring the original name
    File {
        path: PathBuf,

        /// Keep the artifact instead of removing it
        #[arg(long)]
        keep: bool,

        /// Write the plaintext here instead of stripping `.eea`
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Decrypt every `*.eea` file under a directory, recursively
    Dir {
        path: PathBuf,

        /// Keep the artifacts instead of removing them
        #[arg(long)]
        keep: bool,
    },

    /// Decrypt a text artifact (read from stdin when omitted) and print it
    Text { text: Option<String> },
}

/// Handle decryption commands
pub fn handle_decrypt_command(
    paths: &EeaPaths,
    settings: &Settings,
    args: DecryptArgs,
) -> EeaResult<()> {
    let keys = if args.ghost {
        prompt::read_keys_interactively()?
    } else {
        let store = VaultStore::new(settings.keys_dir(paths));
        unseal_selected(&store, args.keys.as_deref())?
    };

    match args.target {
        DecryptTarget::File { path, keep, output } => {
            decrypt_file(&path, output.as_deref(), keep, &keys)
        }
        DecryptTarget::Dir { path, keep } => decrypt_dir(&path, keep, &keys),
        DecryptTarget::Text { text } => decrypt_text(text, &keys),
    }
}

fn decrypt_file(
    path: &Path,
    output: Option<&Path>,
    keep: bool,
    keys: &[String],
) -> EeaResult<()> {
    if !has_extension(path, ARTIFACT_EXT) {
        return Err(EeaError::InvalidInput(format!(
            "{} does not end in .{}",
            path.display(),
            ARTIFACT_EXT
        )));
    }

    let artifact = String::from_utf8(file_io::read_bytes(path)?).map_err(|_| {
        EeaError::InvalidInput(format!("{} is not a text artifact", path.display()))
    })?;

    let plain = crate::crypto::decrypt(&artifact, keys)?;
    let out_path = match output {
        Some(out) => out.to_path_buf(),
        None => plain_path(path),
    };

    file_io::write_bytes(&plain, &out_path)?;
    if !keep {
        file_io::remove_file(path)?;
    }

    println!("Decrypted {} -> {}", path.display(), out_path.display());
    Ok(())
}

fn decrypt_dir(dir: &Path, keep: bool, keys: &[String]) -> EeaResult<()> {
    if !dir.is_dir() {
        return Err(EeaError::InvalidInput(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    collect_files(dir, &mut files)?;

    let mut decrypted = 0usize;
    for path in files {
        if !has_extension(&path, ARTIFACT_EXT) {
            continue;
        }
        decrypt_file(&path, None, keep, keys)?;
        decrypted += 1;
    }

    println!("Decrypted {} file(s) under {}", decrypted, dir.display());
    Ok(())
}

fn decrypt_text(text: Option<String>, keys: &[String]) -> EeaResult<()> {
    let artifact = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| EeaError::Prompt(e.to_string()))?;
            buf
        }
    };

    let plain = crate::crypto::decrypt(artifact.trim(), keys)?;
    println!("{}", String::from_utf8_lossy(&plain));
    Ok(())
}

/// The plaintext path for an artifact: the name with `.eea` stripped, so
/// `notes.txt.eea` becomes `notes.txt`.
fn plain_path(path: &Path) -> PathBuf {
    path.with_extension("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::encrypt::artifact_path;
    use tempfile::TempDir;

    fn test_keys() -> Vec<String> {
        vec!["0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef".to_string()]
    }

    fn encrypt_into(temp: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let artifact = crate::crypto::encrypt(contents, &test_keys()).unwrap();
        let path = artifact_path(&temp.path().join(name));
        std::fs::write(&path, artifact).unwrap();
        path
    }

    #[test]
    fn test_plain_path_strips_extension() {
        assert_eq!(
            plain_path(Path::new("/tmp/notes.txt.eea")),
            PathBuf::from("/tmp/notes.txt")
        );
    }

    #[test]
    fn test_decrypt_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let artifact = encrypt_into(&temp, "note.txt", b"plain contents");

        decrypt_file(&artifact, None, false, &test_keys()).unwrap();

        assert!(!artifact.exists());
        let restored = temp.path().join("note.txt");
        assert_eq!(std::fs::read(&restored).unwrap(), b"plain contents");
    }

    #[test]
    fn test_decrypt_file_rejects_wrong_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");
        std::fs::write(&path, "not an artifact").unwrap();

        assert!(decrypt_file(&path, None, false, &test_keys()).is_err());
    }

    #[test]
    fn test_decrypt_dir_only_touches_artifacts() {
        let temp = TempDir::new().unwrap();
        encrypt_into(&temp, "a.txt", b"aaa");
        std::fs::write(temp.path().join("plain.txt"), "left alone").unwrap();

        decrypt_dir(temp.path(), false, &test_keys()).unwrap();

        assert_eq!(std::fs::read(temp.path().join("a.txt")).unwrap(), b"aaa");
        assert_eq!(
            std::fs::read(temp.path().join("plain.txt")).unwrap(),
            b"left alone"
        );
    }

    #[test]
    fn test_decrypt_file_keep_retains_artifact() {
        let temp = TempDir::new().unwrap();
        let artifact = encrypt_into(&temp, "note.txt", b"plain contents");

        decrypt_file(&artifact, None, true, &test_keys()).unwrap();
        assert!(artifact.exists());
        assert!(temp.path().join("note.txt").exists());
    }
}
