//! Byte-level codecs for DharitrI transaction payloads.
//!
//! - **scalar**: hex/text/integer conversions and argument validation
//! - **transport**: base64 conversions for the wire payload
//! - **address**: bech32 address codec with the `drt` prefix

pub mod address;
pub mod scalar;
pub mod transport;

pub use address::{
    decode_address, encode_address, encode_address_hex, is_address_bytes, ADDRESS_HRP, PUBKEY_BYTES,
};
pub use scalar::{hex_to_biguint, hex_to_count, hex_to_text, is_hex, is_valid_argument_encoding};
pub use transport::{base64_decode, base64_encode, base64_to_hex, base64_to_text};
