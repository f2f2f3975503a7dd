//! Base64 conversions for the transaction payload.
//!
//! The `data` field of a raw transaction travels as standard padded
//! base64. All conversions here are byte-preserving.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use drt_types::DecodeError;

/// Decode a standard base64 string to bytes.
pub fn base64_decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD
        .decode(s)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}

/// Encode bytes as standard base64.
pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 and re-encode the bytes as lowercase hex.
pub fn base64_to_hex(s: &str) -> Result<String, DecodeError> {
    Ok(hex::encode(base64_decode(s)?))
}

/// Decode base64 to Latin-1 text (one char per byte).
pub fn base64_to_text(s: &str) -> Result<String, DecodeError> {
    Ok(base64_decode(s)?.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let bytes = b"DCDTTransfer@414243@0a";
        let encoded = base64_encode(bytes);
        assert_eq!(base64_decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn to_hex() {
        // base64("ABC") == "QUJD"
        assert_eq!(base64_to_hex("QUJD").unwrap(), "414243");
    }

    #[test]
    fn to_text_preserves_every_byte() {
        let all: Vec<u8> = (0u8..=255).collect();
        let text = base64_to_text(&base64_encode(&all)).unwrap();
        let back: Vec<u8> = text.chars().map(|c| c as u8).collect();
        assert_eq!(back, all);
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(base64_decode("not base64!").is_err());
    }
}
