//! Base64 envelope
//!
//! Cipher bytes are arbitrary binary; everything we persist or print is the
//! standard-alphabet base64 of those bytes.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::Base64Error;

/// Encode cipher bytes as printable base64 text.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a stored base64 artifact back into cipher bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, Base64Error> {
    STANDARD
        .decode(text.trim())
        .map_err(|e| Base64Error::DecodeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let data = vec![0u8, 1, 2, 254, 255, 10, 13];
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }

    #[test]
    fn test_decode_tolerates_trailing_newline() {
        let text = format!("{}\n", encode(b"artifact"));
        assert_eq!(decode(&text).unwrap(), b"artifact".to_vec());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode("not valid base64!!!"),
            Err(Base64Error::DecodeFailed(_))
        ));
    }
}
