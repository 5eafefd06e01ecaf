//! EEA - Elite Encryption Algorithm command-line tool
//!
//! A symmetric file and text encryption tool built on a block-chained XOR
//! cipher with SHA-derived keys. Key sets are kept in password-sealed
//! `*.keys` files, or used once and thrown away in ghost mode.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `crypto`: The cipher, key validation, key generation, base64 envelope
//! - `vault`: Password-sealed key storage
//! - `storage`: Raw file I/O with atomic writes
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use eea::crypto::{self, gen_keys};
//!
//! let keys = gen_keys(512, 3)?;
//! let artifact = crypto::encrypt(b"some bytes", &keys)?;
//! let plain = crypto::decrypt(&artifact, &keys)?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod storage;
pub mod vault;

pub use error::{EeaError, EeaResult};
