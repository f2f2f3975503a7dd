//! The raw transaction envelope as submitted to the chain.

use serde::{Deserialize, Serialize};

/// A raw transaction as seen on the wire: bech32 sender and receiver,
/// native value as a decimal string, and an optional base64 payload.
///
/// Immutable input to the decoder; the decoder never mutates or
/// retransmits it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub sender: String,
    pub receiver: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl RawTransaction {
    /// The payload, if present and non-empty.
    pub fn payload(&self) -> Option<&str> {
        self.data.as_deref().filter(|d| !d.is_empty())
    }
}
