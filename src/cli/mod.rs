//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the crypto and vault layers.

pub mod decrypt;
pub mod encrypt;
pub mod keys;
pub mod prompt;

pub use decrypt::{handle_decrypt_command, DecryptArgs};
pub use encrypt::{handle_encrypt_command, EncryptArgs};
pub use keys::{handle_keys_command, KeysCommands};

/// File extension for encrypted artifacts
pub const ARTIFACT_EXT: &str = "eea";
