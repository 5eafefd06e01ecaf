//! Key-set validation
//!
//! Every operation that touches the cipher goes through [`validate`] first,
//! so the transform itself never has to fail: keys are ASCII hex text, all
//! the same length, and that length is a positive multiple of [`KEY_UNIT`].

use crate::error::KeyError;

/// Smallest valid key length in hex characters (a SHA-256 digest's hex text)
pub const KEY_UNIT: usize = 64;

/// Check that `keys` forms a valid ordered key set.
///
/// Fail-fast: the first violation encountered is returned; the contract is
/// to reject any non-conforming set, not to enumerate every problem.
pub fn validate(keys: &[String]) -> Result<(), KeyError> {
    let first = keys.first().ok_or(KeyError::NoKeys)?;

    let size = first.len();
    if size == 0 || size % KEY_UNIT != 0 {
        return Err(KeyError::InvalidLength(size));
    }

    for key in keys {
        if key.len() != size {
            return Err(KeyError::LengthMismatch {
                expected: size,
                found: key.len(),
            });
        }
        if let Some(bad) = key.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(KeyError::InvalidKey(bad));
        }
    }

    Ok(())
}
