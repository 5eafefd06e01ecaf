//! Key generation
//!
//! Keys are hex digest text accumulated from hashes of fresh OS randomness:
//! SHA-512 contributes 512 bits per iteration while more than 256 bits are
//! still needed, then SHA-256 tops off the remainder. A key of `size_bits`
//! is therefore exactly `size_bits / 4` hex characters.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256, Sha512};

use crate::error::KeygenError;

/// Bytes of fresh randomness hashed per digest iteration
const SEED_LEN: usize = 32;

/// Generate `count` keys of `size_bits` bits each.
///
/// `size_bits` must be a nonzero multiple of 256 (256, 512, 1024, ...).
pub fn gen_keys(size_bits: usize, count: usize) -> Result<Vec<String>, KeygenError> {
    if size_bits == 0 || size_bits % 256 != 0 {
        return Err(KeygenError::KeySize(size_bits));
    }

    let mut keys = Vec::with_capacity(count);
    for _ in 0..count {
        let mut key = String::with_capacity(size_bits / 4);
        let mut bits = 0;
        while bits < size_bits {
            let seed = random_seed()?;
            if size_bits - bits > 256 {
                key.push_str(&hex::encode(Sha512::digest(seed)));
                bits += 512;
            } else {
                key.push_str(&hex::encode(Sha256::digest(seed)));
                bits += 256;
            }
        }
        keys.push(key);
    }
    Ok(keys)
}

/// Draw one seed's worth of bytes from the OS RNG.
fn random_seed() -> Result<[u8; SEED_LEN], KeygenError> {
    let mut seed = [0u8; SEED_LEN];
    OsRng
        .try_fill_bytes(&mut seed)
        .map_err(|e| KeygenError::RandomBytes(e.to_string()))?;
    Ok(seed)
}
