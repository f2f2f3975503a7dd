//! Multi-transfer (`MultiDCDTNFTTransfer`) classification.

use drt_codec as codec;
use drt_types::{DecodeError, DecodedMetadata, Transfer};
use tracing::debug;

const FUNCTION_NAME: &str = "MultiDCDTNFTTransfer";

/// Arguments consumed per transfer: identifier-or-collection, nonce,
/// amount.
const ARGS_PER_TRANSFER: usize = 3;

/// Reinterpret a `MultiDCDTNFTTransfer` call as a batch of transfers.
///
/// Self-addressed like the NFT transfer; the real receiver is the first
/// argument, the transfer count the second. Each transfer then consumes
/// three arguments; an empty nonce marks a fungible token, a non-empty
/// nonce an NFT. Whatever remains after the batch is a nested call.
///
/// No single value represents a batch, so the top-level value stays at
/// zero. A truncated argument list declines rather than erroring.
pub(crate) fn classify(metadata: &DecodedMetadata) -> Result<Option<DecodedMetadata>, DecodeError> {
    if metadata.sender != metadata.receiver {
        return Ok(None);
    }
    let (Some(name), Some(args)) = (&metadata.function_name, &metadata.function_args) else {
        return Ok(None);
    };
    if name.as_str() != FUNCTION_NAME
        || args.len() < ARGS_PER_TRANSFER
        || !codec::is_address_bytes(&args[0])
    {
        return Ok(None);
    }
    let Ok(count) = codec::hex_to_count(&args[1]) else {
        // A count that overflows usize cannot come from a real payload.
        return Ok(None);
    };
    let batch_len = count.checked_mul(ARGS_PER_TRANSFER);
    if batch_len.map_or(true, |n| args.len() < 2 + n) {
        debug!(count, args = args.len(), "truncated multi-transfer argument list");
        return Ok(None);
    }

    let mut transfers = Vec::with_capacity(count);
    let mut cursor = 2;
    for _ in 0..count {
        let chunk = &args[cursor..cursor + ARGS_PER_TRANSFER];
        let ticker = codec::hex_to_text(&chunk[0]);
        let nonce_hex = &chunk[1];
        let value = codec::hex_to_biguint(&chunk[2])?;
        if nonce_hex.is_empty() {
            transfers.push(Transfer::fungible(value, ticker));
        } else {
            transfers.push(Transfer::non_fungible(value, ticker, nonce_hex));
        }
        cursor += ARGS_PER_TRANSFER;
    }

    let mut result = DecodedMetadata {
        sender: metadata.sender.clone(),
        receiver: codec::encode_address_hex(&args[0])?,
        transfers: Some(transfers),
        ..Default::default()
    };
    if args.len() > cursor {
        result.function_name = Some(codec::hex_to_text(&args[cursor]));
        result.function_args = Some(args[cursor + 1..].to_vec());
    }
    Ok(Some(result))
}
