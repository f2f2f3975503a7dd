//! Hex, text and integer conversions.
//!
//! Call-data arguments on chain are hex strings separated by `@`. Text
//! inside them (token tickers, nested function names) is single-byte
//! Latin-1, so every byte maps to exactly one `char` and conversions are
//! byte-preserving.

use drt_types::DecodeError;
use num_bigint::BigUint;

/// True iff every character is a hex digit (case-insensitive).
/// The empty string is valid hex.
pub fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// True iff `s` is hex of even length, i.e. encodes whole bytes.
pub fn is_valid_argument_encoding(s: &str) -> bool {
    is_hex(s) && s.len() % 2 == 0
}

/// Permissively decode hex to Latin-1 text.
///
/// Malformed hex yields the empty string; this conversion never fails.
pub fn hex_to_text(hex: &str) -> String {
    match hex::decode(hex) {
        Ok(bytes) => bytes.into_iter().map(char::from).collect(),
        Err(_) => String::new(),
    }
}

/// Parse hex as an unsigned arbitrary-precision integer.
///
/// The empty string parses to 0. Values are non-negative by
/// construction; invalid hex is a hard failure.
pub fn hex_to_biguint(hex: &str) -> Result<BigUint, DecodeError> {
    if hex.is_empty() {
        return Ok(BigUint::default());
    }
    BigUint::parse_bytes(hex.as_bytes(), 16).ok_or_else(|| DecodeError::InvalidHex(hex.to_string()))
}

/// Parse hex as a bounded machine integer. Used only for counts.
///
/// The empty string parses to 0. Overflow is reported as invalid hex;
/// no legitimate payload carries a count that large.
pub fn hex_to_count(hex: &str) -> Result<usize, DecodeError> {
    if hex.is_empty() {
        return Ok(0);
    }
    usize::from_str_radix(hex, 16).map_err(|_| DecodeError::InvalidHex(hex.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_validation() {
        assert!(is_hex(""));
        assert!(is_hex("0aF9"));
        assert!(!is_hex("0g"));
        assert!(!is_hex("a b"));
    }

    #[test]
    fn argument_encoding_requires_even_length() {
        assert!(is_valid_argument_encoding(""));
        assert!(is_valid_argument_encoding("414243"));
        assert!(!is_valid_argument_encoding("abc"));
        assert!(!is_valid_argument_encoding("zz"));
    }

    #[test]
    fn text_decoding_is_permissive() {
        assert_eq!(hex_to_text("414243"), "ABC");
        assert_eq!(hex_to_text(""), "");
        assert_eq!(hex_to_text("xx"), "");
        assert_eq!(hex_to_text("a"), "");
    }

    #[test]
    fn text_decoding_is_latin1() {
        // 0xff is not valid UTF-8 on its own but is a single Latin-1 char.
        assert_eq!(hex_to_text("ff"), "\u{ff}");
    }

    #[test]
    fn biguint_parsing() {
        assert_eq!(hex_to_biguint("").unwrap(), BigUint::default());
        assert_eq!(hex_to_biguint("0a").unwrap(), BigUint::from(10u32));
        assert_eq!(
            hex_to_biguint("0de0b6b3a7640000").unwrap(),
            BigUint::from(1_000_000_000_000_000_000u64)
        );
        assert!(hex_to_biguint("0g").is_err());
    }

    #[test]
    fn count_parsing() {
        assert_eq!(hex_to_count("").unwrap(), 0);
        assert_eq!(hex_to_count("02").unwrap(), 2);
        assert_eq!(hex_to_count("10").unwrap(), 16);
        assert!(hex_to_count("nothex").is_err());
        assert!(hex_to_count("ffffffffffffffffff").is_err());
    }
}
