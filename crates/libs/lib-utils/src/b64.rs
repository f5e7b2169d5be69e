//! # Base64 Encoding/Decoding
//!
//! Utilities for base64 encoding and decoding (standard alphabet, padded).

use base64::{Engine as _, engine::general_purpose};

/// Encode bytes to a base64 string.
pub fn b64_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(content)
}

/// Decode a base64 string to bytes.
pub fn b64_decode(b64: &str) -> Result<Vec<u8>, Error> {
    general_purpose::STANDARD
        .decode(b64)
        .map_err(|_| Error::FailToB64Decode)
}

/// Decode a base64 string to a UTF-8 string.
pub fn b64_decode_to_string(b64: &str) -> Result<String, Error> {
    b64_decode(b64)
        .and_then(|bytes| String::from_utf8(bytes).map_err(|_| Error::FailToB64Decode))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToB64Decode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_to_string() {
        assert_eq!(
            b64_decode_to_string("aGVsbG8gd29ybGQ=").expect("valid base64 should decode"),
            "hello world"
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let payload = b"\x00\x01\xfe\xff";
        let encoded = b64_encode(payload);
        assert_eq!(
            b64_decode(&encoded).expect("encoded payload should decode"),
            payload
        );
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert!(b64_decode("not base64!!!").is_err());
    }

    #[test]
    fn test_decode_to_string_rejects_non_utf8() {
        let encoded = b64_encode([0xff, 0xfe, 0xfd]);
        assert!(b64_decode_to_string(&encoded).is_err());
    }
}
