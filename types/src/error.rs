//! Shared error type for the decoder workspace.

use thiserror::Error;

/// Hard decoding failures.
///
/// The decoder degrades gracefully wherever the payload is merely
/// unrecognized: classifiers decline, relayed unwrapping falls back, and
/// invalid argument encodings drop the function call. A `DecodeError`
/// only surfaces for input that is malformed beyond any structural
/// interpretation (e.g. a non-decimal top-level value).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid hex string: {0:?}")]
    InvalidHex(String),

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("invalid address bytes: expected {expected} bytes, got {actual}")]
    InvalidAddressBytes { expected: usize, actual: usize },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid transaction value: {0:?}")]
    InvalidValue(String),

    #[error("malformed relayed payload: {0}")]
    MalformedRelayed(String),
}
