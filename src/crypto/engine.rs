//! The EEA cipher transform
//!
//! A self-keying block-chained XOR cipher: data is processed in blocks the
//! size of the key, and each completed ciphertext block becomes the key for
//! the block after it. The key material is the raw ASCII bytes of the hex
//! key text, never the binary value the hex represents - decoding it would
//! silently break compatibility with every existing artifact and vault.
//!
//! `forward` and `inverse` are deliberately two separate pure functions:
//! encryption walks the data head-to-tail, decryption must walk tail-to-head
//! because each block's key is only knowable from the block before it.

/// Encrypt `data` with a single key.
///
/// The input is zero-padded to the next multiple of the key length, then
/// XORed byte-by-byte against a key buffer that starts as the key's ASCII
/// bytes and is replaced by each completed ciphertext block.
///
/// The returned ciphertext has the padded length. Never fails; key-set
/// validity is enforced upstream by [`crate::crypto::keys::validate`].
pub fn forward(data: &[u8], key: &str) -> Vec<u8> {
    let key_len = key.len();
    let padded_len = data.len().div_ceil(key_len) * key_len;

    let mut key_buf = key.as_bytes().to_vec();
    let mut prev_block = vec![0u8; key_len];
    let mut cipher = Vec::with_capacity(padded_len);

    let mut pos = 0;
    for i in 0..padded_len {
        let byte = data.get(i).copied().unwrap_or(0);
        let b = byte ^ key_buf[pos];
        cipher.push(b);
        prev_block[pos] = b;
        pos += 1;
        if pos == key_len {
            // The block just produced keys the next one. prev_block is
            // fully rewritten before the next swap, so swapping buffers
            // is equivalent to copying.
            std::mem::swap(&mut key_buf, &mut prev_block);
            pos = 0;
        }
    }
    cipher
}

/// Decrypt `data` with a single key.
///
/// Blocks are reconstructed from the tail backward: the block at offset
/// `N - L` is decrypted against the block at `N - 2L`, and so on down to the
/// first block, which is decrypted against the key itself.
///
/// `data.len()` must be a multiple of `key.len()`; callers check this before
/// invoking. The result keeps its zero padding - strip it with
/// [`strip_padding`] once all cascade layers are undone.
pub fn inverse(data: &[u8], key: &str) -> Vec<u8> {
    let key_len = key.len();
    debug_assert_eq!(data.len() % key_len, 0);

    let mut plain = vec![0u8; data.len()];
    let mut start = data.len();
    while start > 0 {
        start -= key_len;
        let key_block: &[u8] = if start >= key_len {
            &data[start - key_len..start]
        } else {
            key.as_bytes()
        };
        for (j, kb) in key_block.iter().enumerate() {
            plain[start + j] = data[start + j] ^ kb;
        }
    }
    plain
}

/// Apply [`forward`] once per key, in list order.
pub fn cascade_forward(data: &[u8], keys: &[String]) -> Vec<u8> {
    let mut cipher = data.to_vec();
    for key in keys {
        cipher = forward(&cipher, key);
    }
    cipher
}

/// Apply [`inverse`] once per key, in reverse list order, undoing
/// [`cascade_forward`] exactly.
pub fn cascade_inverse(data: &[u8], keys: &[String]) -> Vec<u8> {
    let mut plain = data.to_vec();
    for key in keys.iter().rev() {
        plain = inverse(&plain, key);
    }
    plain
}

/// Remove the zero padding added during encryption.
///
/// Trailing 0x00 bytes in the original plaintext are indistinguishable from
/// padding and are stripped along with it. Known limitation, preserved for
/// compatibility with existing artifacts.
pub fn strip_padding(mut data: Vec<u8>) -> Vec<u8> {
    while data.last() == Some(&0) {
        data.pop();
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "d1289f2aafbd2b5d8f58a38a87cd60c4d0cfb22c68c99dfbf7b3bb07aa1b51d4";
    const KEY2: &str = "1b09b51fe3accabf873bf5e1849d42a93e0fcba379c9b9a53a66d4b24d1bfcd9";

    #[test]
    fn test_single_block_scenario() {
        // Short UTF-8 text with a 64-character key: exactly one padded block
        let data = b"This is a test string.\nIt will be encrypted.";
        let cipher = forward(data, KEY);
        assert_eq!(cipher.len(), 64);

        let plain = strip_padding(inverse(&cipher, KEY));
        assert_eq!(plain, data.to_vec());
    }

    #[test]
    fn test_roundtrip_multi_block() {
        let data: Vec<u8> = (1..=200).collect();
        let cipher = forward(&data, KEY);
        assert_eq!(cipher.len(), 256);

        let plain = strip_padding(inverse(&cipher, KEY));
        assert_eq!(plain, data);
    }

    #[test]
    fn test_exact_multiple_gets_no_padding() {
        let data = vec![7u8; 128];
        let cipher = forward(&data, KEY);
        assert_eq!(cipher.len(), 128);
        assert_eq!(inverse(&cipher, KEY), data);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert!(forward(&[], KEY).is_empty());
        assert!(inverse(&[], KEY).is_empty());
    }

    #[test]
    fn test_forward_is_deterministic() {
        let data = b"determinism check";
        assert_eq!(forward(data, KEY), forward(data, KEY));
    }

    #[test]
    fn test_block_feedback_chain() {
        // The second block must be XORed against the first ciphertext block,
        // not against the original key.
        let data: Vec<u8> = (0..128).map(|i| (i * 3 + 1) as u8).collect();
        let cipher = forward(&data, KEY);
        for i in 0..64 {
            assert_eq!(cipher[64 + i], data[64 + i] ^ cipher[i]);
        }
    }

    #[test]
    fn test_cascade_roundtrip() {
        let keys = vec![KEY.to_string(), KEY2.to_string()];
        let data = b"cascade me through several keys in order".to_vec();

        let cipher = cascade_forward(&data, &keys);
        assert_eq!(cipher.len(), 64);

        let plain = strip_padding(cascade_inverse(&cipher, &keys));
        assert_eq!(plain, data);
    }

    #[test]
    fn test_cascade_order_matters() {
        let keys = vec![KEY.to_string(), KEY2.to_string()];
        let reversed = vec![KEY2.to_string(), KEY.to_string()];
        let data = b"order sensitivity".to_vec();

        assert_ne!(cascade_forward(&data, &keys), cascade_forward(&data, &reversed));
    }

    #[test]
    fn test_trailing_nuls_are_lost() {
        // Documented limitation: trailing zero bytes in the plaintext are
        // indistinguishable from padding.
        let data = b"ends in zeros\x00\x00".to_vec();
        let cipher = forward(&data, KEY);
        let plain = strip_padding(inverse(&cipher, KEY));
        assert_eq!(plain, b"ends in zeros".to_vec());
    }

    #[test]
    fn test_strip_padding_leaves_interior_nuls() {
        let data = vec![1, 0, 2, 0, 0];
        assert_eq!(strip_padding(data), vec![1, 0, 2]);
    }
}
