//! Core types for the DharitrI transaction decoder.
//!
//! This crate defines the types shared across the workspace: the raw
//! transaction envelope as submitted to the chain, the decoded metadata
//! returned to callers, and the common error type.

pub mod error;
pub mod metadata;
pub mod transaction;

pub use error::DecodeError;
pub use metadata::{DecodedMetadata, Transfer, TransferProperties};
pub use transaction::RawTransaction;
