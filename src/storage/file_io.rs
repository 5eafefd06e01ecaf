//! File I/O utilities with atomic writes
//!
//! Raw byte reads and writes for artifacts and vault files. Writes go to a
//! temp file in the same directory and are renamed into place, so a crash
//! mid-write never leaves a half-written artifact behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::FileIoError;

/// Read a file's entire contents as raw bytes.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, FileIoError> {
    fs::read(path).map_err(|e| FileIoError::ReadFailed {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write raw bytes to a file atomically (write to temp, then rename).
///
/// Creates the parent directory if needed. Empty input is rejected with
/// `NoData` - an encrypt/decrypt operation never legitimately produces
/// nothing to write.
pub fn write_bytes(data: &[u8], path: &Path) -> Result<(), FileIoError> {
    if data.is_empty() {
        return Err(FileIoError::NoData);
    }

    let write_failed = |e: std::io::Error| FileIoError::WriteFailed {
        path: path.display().to_string(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
    }

    // Temp file in the same directory so the rename stays atomic
    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path).map_err(write_failed)?;
    file.write_all(data).map_err(write_failed)?;
    file.sync_all().map_err(write_failed)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_failed(e)
    })?;

    Ok(())
}

/// Delete a file.
pub fn remove_file(path: &Path) -> Result<(), FileIoError> {
    fs::remove_file(path).map_err(|e| FileIoError::WriteFailed {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.eea");

        write_bytes(b"cipher bytes", &path).unwrap();
        assert_eq!(read_bytes(&path).unwrap(), b"cipher bytes".to_vec());
    }

    #[test]
    fn test_empty_write_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.eea");

        assert!(matches!(write_bytes(&[], &path), Err(FileIoError::NoData)));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.eea");

        assert!(matches!(
            read_bytes(&path),
            Err(FileIoError::ReadFailed { .. })
        ));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("data.eea");

        write_bytes(b"x", &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.eea");

        write_bytes(b"x", &path).unwrap();
        assert!(!temp.path().join("data.tmp").exists());
    }

    #[test]
    fn test_remove_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.eea");

        write_bytes(b"x", &path).unwrap();
        remove_file(&path).unwrap();
        assert!(!path.exists());
        assert!(remove_file(&path).is_err());
    }
}
