//! Password-protected key vault
//!
//! A vault is a key set sealed under the user's password: the blob
//! `salt \n key1 \n ... \n keyN \n` is run through the cipher's forward
//! transform [`SEAL_ROUNDS`] times with `hex(SHA-512(password))` as the key,
//! then base64-encoded. Unsealing reverses the rounds and re-validates the
//! keys; there is no way to tell a wrong password from a corrupted file, so
//! both surface as [`VaultError::WrongPasswordOrCorrupt`].

pub mod store;

pub use store::VaultStore;

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha512};

use crate::crypto::{encoding, engine, keys};
use crate::error::{EeaResult, KeygenError, VaultError};

/// Forward/inverse applications of the cipher when sealing/unsealing
pub const SEAL_ROUNDS: u8 = 5;

/// Derive the vault key from a password: the hex text of its SHA-512
/// digest, giving a 128-character key (two cipher blocks wide).
pub fn password_key(password: &str) -> String {
    hex::encode(Sha512::digest(password.as_bytes()))
}

/// Seal `keys` under `password`, returning the printable vault artifact.
pub fn seal(keys: &[String], password: &str) -> EeaResult<String> {
    keys::validate(keys)?;

    let pass_key = password_key(password);
    let salt = gen_salt(keys[0].len() / 2)?;

    let mut blob = Vec::with_capacity(salt.len() + 1 + keys.len() * (keys[0].len() + 1));
    blob.extend_from_slice(&salt);
    blob.push(b'\n');
    for key in keys {
        blob.extend_from_slice(key.as_bytes());
        blob.push(b'\n');
    }

    // Same key every round; this is repetition, not a cascade
    for _ in 0..SEAL_ROUNDS {
        blob = engine::forward(&blob, &pass_key);
    }

    Ok(encoding::encode(&blob))
}

/// Unseal a vault artifact with `password`, returning the stored keys in
/// their original order.
pub fn unseal(sealed: &str, password: &str) -> EeaResult<Vec<String>> {
    let pass_key = password_key(password);

    let mut blob = encoding::decode(sealed)?;
    if blob.is_empty() || blob.len() % pass_key.len() != 0 {
        return Err(VaultError::WrongPasswordOrCorrupt.into());
    }

    for _ in 0..SEAL_ROUNDS {
        blob = engine::inverse(&blob, &pass_key);
    }
    let blob = engine::strip_padding(blob);

    // First segment is the salt; every remaining non-empty segment is a key
    let mut segments = blob.split(|b| *b == b'\n');
    segments.next();

    let mut recovered = Vec::new();
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        let key = String::from_utf8(segment.to_vec())
            .map_err(|_| VaultError::WrongPasswordOrCorrupt)?;
        recovered.push(key);
    }

    keys::validate(&recovered).map_err(|_| VaultError::WrongPasswordOrCorrupt)?;
    Ok(recovered)
}

/// Generate `len` random salt bytes.
///
/// Bytes equal to the `\n` delimiter are re-drawn: the salt sits ahead of a
/// newline-delimited key list, and an embedded delimiter would corrupt the
/// blob's layout on unseal.
fn gen_salt(len: usize) -> Result<Vec<u8>, KeygenError> {
    let mut salt = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| KeygenError::RandomBytes(e.to_string()))?;

    for byte in salt.iter_mut() {
        while *byte == b'\n' {
            let mut replacement = [0u8; 1];
            OsRng
                .try_fill_bytes(&mut replacement)
                .map_err(|e| KeygenError::RandomBytes(e.to_string()))?;
            *byte = replacement[0];
        }
    }
    Ok(salt)
}
