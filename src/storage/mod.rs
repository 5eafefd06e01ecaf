//! Storage layer for EEA
//!
//! Raw byte file I/O with atomic writes. Vault-file management sits on top
//! of this in [`crate::vault::store`].

pub mod file_io;

pub use file_io::{read_bytes, remove_file, write_bytes};
