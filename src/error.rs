//! Custom error types for EEA
//!
//! Each failure domain gets its own small enum (keys, base64, file I/O,
//! key generation, vault), and `EeaError` folds them into the single
//! crate-level error that handlers return.

use thiserror::Error;

/// Violations of the key-set invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// No keys were provided at all
    #[error("no keys were provided")]
    NoKeys,

    /// The first key's length is not a positive multiple of 64
    #[error("invalid key length {0}: must be a positive multiple of 64")]
    InvalidLength(usize),

    /// A key's length differs from the first key's
    #[error("key length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A key contains a character outside [0-9a-fA-F]
    #[error("key contains non-hex character {0:?}")]
    InvalidKey(char),
}

/// Base64 envelope errors
///
/// `EncodeFailed` is retained for parity with the decode side, but encoding
/// raw bytes cannot fail with the base64 engine in use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// Encoding cipher bytes to base64 failed
    #[error("encoding data to base64 failed: {0}")]
    EncodeFailed(String),

    /// Decoding a stored artifact from base64 failed
    #[error("decoding data from base64 failed: {0}")]
    DecodeFailed(String),
}

/// File read/write errors surfaced by the storage layer
#[derive(Error, Debug)]
pub enum FileIoError {
    /// Reading the file failed
    #[error("reading the file {path} failed: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    /// Writing the file failed
    #[error("writing the file {path} failed: {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },

    /// There was nothing to write
    #[error("no data was provided to write")]
    NoData,
}

/// Key generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeygenError {
    /// The secure RNG was unavailable or failed
    #[error("generating random bytes failed: {0}")]
    RandomBytes(String),

    /// Requested key size is not a nonzero multiple of 256
    #[error("invalid key size {0}: must be a nonzero multiple of 256")]
    KeySize(usize),
}

/// Vault sealing/unsealing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// Unsealing produced an invalid key set; the cause cannot be
    /// distinguished between a wrong password and a corrupted vault
    #[error("wrong password or corrupted vault")]
    WrongPasswordOrCorrupt,
}

/// The main error type for EEA operations
#[derive(Error, Debug)]
pub enum EeaError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Base64(#[from] Base64Error),

    #[error(transparent)]
    FileIo(#[from] FileIoError),

    #[error(transparent)]
    Keygen(#[from] KeygenError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    /// Configuration loading/saving errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Password prompting failed
    #[error("prompt error: {0}")]
    Prompt(String),

    /// A CLI target or argument was unusable (bad extension, missing
    /// vault file, ciphertext of impossible length, ...)
    #[error("{0}")]
    InvalidInput(String),
}

/// Result type alias for EEA operations
pub type EeaResult<T> = Result<T, EeaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_error_display() {
        let err = KeyError::InvalidLength(50);
        assert_eq!(
            err.to_string(),
            "invalid key length 50: must be a positive multiple of 64"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = KeyError::LengthMismatch {
            expected: 64,
            found: 128,
        };
        assert_eq!(err.to_string(), "key length mismatch: expected 64, found 128");
    }

    #[test]
    fn test_vault_error_is_opaque() {
        let err = VaultError::WrongPasswordOrCorrupt;
        assert_eq!(err.to_string(), "wrong password or corrupted vault");
    }

    #[test]
    fn test_sub_error_folds_into_eea_error() {
        let err: EeaError = KeyError::NoKeys.into();
        assert!(matches!(err, EeaError::Key(KeyError::NoKeys)));
    }
}
