//! Decodes raw DharitrI transactions into structured transfer metadata.
//!
//! Transaction kinds, in classification order:
//! - **DCDTTransfer**: single fungible token transfer
//! - **DCDTNFTTransfer**: NFT / SFT transfer (self-addressed call)
//! - **MultiDCDTNFTTransfer**: batch of fungible and NFT transfers
//! - anything else: plain value transfer or opaque contract call
//!
//! Relayed transactions (fee sponsorship, v1 and v2) are unwrapped
//! recursively before classification, so a relayed token transfer
//! decodes the same as a directly submitted one.
//!
//! Decoding is a pure function: no I/O, no shared state, and malformed
//! payloads degrade to a less specific shape instead of failing.

pub mod base;
mod multi;
mod nft;
mod relayed;
mod token;

pub use drt_types::{DecodeError, DecodedMetadata, RawTransaction, Transfer, TransferProperties};

/// Decode a raw transaction into its semantic effect.
///
/// Runs the base extractor (including relayed unwrapping), then tries
/// the transfer classifiers in fixed order, returning the first match
/// or the base metadata if none applies. Classifiers gate on disjoint
/// function names, so at most one can match.
pub fn decode_transaction(tx: &RawTransaction) -> Result<DecodedMetadata, DecodeError> {
    let metadata = base::extract_metadata(tx)?;

    if let Some(specialized) = token::classify(&metadata)? {
        return Ok(specialized);
    }
    if let Some(specialized) = nft::classify(&metadata)? {
        return Ok(specialized);
    }
    if let Some(specialized) = multi::classify(&metadata)? {
        return Ok(specialized);
    }

    Ok(metadata)
}
