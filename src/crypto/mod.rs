//! Cryptographic core for EEA
//!
//! The cipher transform, key-set validation, key generation, and the base64
//! envelope. Everything here is synchronous, does no I/O, and keeps no state
//! beyond one call's local buffers.

pub mod encoding;
pub mod engine;
pub mod keygen;
pub mod keys;

pub use engine::{cascade_forward, cascade_inverse, strip_padding};
pub use keygen::gen_keys;
pub use keys::{validate, KEY_UNIT};

use crate::error::{EeaError, EeaResult};

/// Encrypt raw bytes under an ordered key set and return the printable
/// artifact: base64 of the cascaded cipher bytes.
pub fn encrypt(data: &[u8], keys: &[String]) -> EeaResult<String> {
    keys::validate(keys)?;
    Ok(encoding::encode(&engine::cascade_forward(data, keys)))
}

/// Decrypt a printable artifact back into the original bytes, stripping the
/// zero padding added during encryption.
pub fn decrypt(text: &str, keys: &[String]) -> EeaResult<Vec<u8>> {
    keys::validate(keys)?;

    let cipher = encoding::decode(text)?;
    if cipher.len() % keys[0].len() != 0 {
        return Err(EeaError::InvalidInput(
            "ciphertext length does not match the key length".to_string(),
        ));
    }

    Ok(engine::strip_padding(engine::cascade_inverse(&cipher, keys)))
}
