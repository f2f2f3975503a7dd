//! Relayed (fee sponsorship) transaction unwrapping.
//!
//! A relayed transaction wraps another account's transaction so the
//! relayer pays its gas. Two envelope formats exist on chain:
//!
//! - **v1** (`relayedTx`): one argument holding a hex-encoded JSON
//!   record of the inner transaction, with base64 public keys.
//! - **v2** (`relayedTxV2`): four arguments — receiver public key,
//!   inner nonce, inner payload (hex), inner signature. The inner
//!   transaction carries no value and executes with the outer receiver
//!   as its sender.
//!
//! Both formats may nest (a relayed transaction can itself wrap a
//! relayed one); the extractor recursion handles that, bounded by
//! [`crate::base::MAX_RELAYED_DEPTH`].

use drt_codec as codec;
use drt_types::{DecodeError, DecodedMetadata, RawTransaction};
use serde::Deserialize;
use serde_json::Value;

use crate::base;

pub(crate) const RELAYED_V1: &str = "relayedTx";
pub(crate) const RELAYED_V2: &str = "relayedTxV2";

/// Inner transaction record embedded in a relayed v1 payload. The wire
/// JSON carries more fields (nonce, gas, signature, chain id); only
/// these four matter for decoding, the rest are ignored.
#[derive(Debug, Deserialize)]
struct InnerTransaction {
    sender: String,
    receiver: String,
    value: Value,
    #[serde(default)]
    data: Option<String>,
}

/// Unwrap a relayed v1 argument into the decoded inner transaction.
///
/// Any failure (bad hex, bad JSON, bad public keys) is returned to the
/// caller, which falls back to the outer metadata.
pub(crate) fn unwrap_v1(arg: &str, depth: usize) -> Result<DecodedMetadata, DecodeError> {
    let json = codec::hex_to_text(arg);
    let inner: InnerTransaction =
        serde_json::from_str(&json).map_err(|e| DecodeError::MalformedRelayed(e.to_string()))?;

    let inner_tx = RawTransaction {
        sender: address_from_base64(&inner.sender)?,
        receiver: address_from_base64(&inner.receiver)?,
        value: decimal_value(&inner.value)?,
        data: inner.data,
    };
    base::extract_at_depth(&inner_tx, depth + 1)
}

/// Unwrap a relayed v2 argument list into the decoded inner
/// transaction.
pub(crate) fn unwrap_v2(
    outer_receiver: &str,
    args: &[String],
    depth: usize,
) -> Result<DecodedMetadata, DecodeError> {
    let receiver = codec::encode_address_hex(&args[0])?;
    let payload =
        hex::decode(&args[2]).map_err(|_| DecodeError::InvalidHex(args[2].clone()))?;

    let inner_tx = RawTransaction {
        sender: outer_receiver.to_string(),
        receiver,
        value: "0".to_string(),
        data: (!payload.is_empty()).then(|| codec::base64_encode(&payload)),
    };
    base::extract_at_depth(&inner_tx, depth + 1)
}

/// Base64 public key → `drt1...` address.
fn address_from_base64(pubkey_b64: &str) -> Result<String, DecodeError> {
    let pubkey_hex = codec::base64_to_hex(pubkey_b64)?;
    codec::encode_address_hex(&pubkey_hex)
}

/// The `value` field of the embedded record arrives as a JSON number on
/// chain, but a decimal string is accepted too.
fn decimal_value(value: &Value) -> Result<String, DecodeError> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        other => Err(DecodeError::MalformedRelayed(format!(
            "unsupported value field: {other}"
        ))),
    }
}
