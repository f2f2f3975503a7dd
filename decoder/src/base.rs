//! Base metadata extraction: payload tokenization and relayed
//! unwrapping.
//!
//! The payload text is `function@arg1@arg2@...` where every argument is
//! even-length hex. A payload that does not fit this shape stays
//! opaque: the transaction decodes as a plain value transfer.

use drt_codec as codec;
use drt_types::{DecodeError, DecodedMetadata, RawTransaction};
use num_bigint::BigUint;
use tracing::debug;

use crate::relayed;

/// Maximum number of nested relayed layers unwrapped before giving up.
/// The chain only ever produces one or two; anything deeper is
/// adversarial nesting.
pub(crate) const MAX_RELAYED_DEPTH: usize = 8;

/// Extract the base metadata of a transaction: sender, receiver, value,
/// and the function call if the payload carries one. Relayed layers are
/// unwrapped recursively, so the result describes the innermost
/// transaction.
pub fn extract_metadata(tx: &RawTransaction) -> Result<DecodedMetadata, DecodeError> {
    extract_at_depth(tx, 0)
}

pub(crate) fn extract_at_depth(
    tx: &RawTransaction,
    depth: usize,
) -> Result<DecodedMetadata, DecodeError> {
    let mut metadata = DecodedMetadata {
        sender: tx.sender.clone(),
        receiver: tx.receiver.clone(),
        value: parse_value(&tx.value)?,
        ..Default::default()
    };

    let Some(payload) = tx.payload() else {
        return Ok(metadata);
    };
    let text = match codec::base64_to_text(payload) {
        Ok(text) => text,
        Err(e) => {
            debug!(error = %e, "payload is not base64, treating as plain transfer");
            return Ok(metadata);
        }
    };

    let mut parts = text.split('@');
    let name = parts.next().unwrap_or_default();
    let args: Vec<String> = parts.map(str::to_string).collect();
    if !args.iter().all(|a| codec::is_valid_argument_encoding(a)) {
        debug!(function = name, "argument encoding rejected, keeping payload opaque");
        return Ok(metadata);
    }
    metadata.function_name = Some(name.to_string());
    metadata.function_args = Some(args);

    if depth >= MAX_RELAYED_DEPTH {
        debug!(depth, "relayed nesting limit reached, not unwrapping further");
        return Ok(metadata);
    }

    // Unwrap failures are swallowed: a malformed relayed envelope still
    // decodes as the outer call it is.
    let args = metadata.function_args.as_deref().unwrap_or_default();
    match metadata.function_name.as_deref() {
        Some(relayed::RELAYED_V1) if args.len() == 1 => {
            match relayed::unwrap_v1(&args[0], depth) {
                Ok(inner) => return Ok(inner),
                Err(e) => debug!(error = %e, "relayed v1 unwrap failed, keeping outer metadata"),
            }
        }
        Some(relayed::RELAYED_V2) if args.len() == 4 => {
            match relayed::unwrap_v2(&metadata.receiver, args, depth) {
                Ok(inner) => return Ok(inner),
                Err(e) => debug!(error = %e, "relayed v2 unwrap failed, keeping outer metadata"),
            }
        }
        _ => {}
    }

    Ok(metadata)
}

/// Parse the native value field. The empty string counts as zero, the
/// same as the original API treats a missing value.
fn parse_value(value: &str) -> Result<BigUint, DecodeError> {
    if value.is_empty() {
        return Ok(BigUint::default());
    }
    value
        .parse()
        .map_err(|_| DecodeError::InvalidValue(value.to_string()))
}
