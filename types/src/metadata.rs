//! Decoded transaction metadata — the output model of the decoder.
//!
//! Field names and the transfer property tagging (`token` vs
//! `collection` + `identifier`) are a compatibility surface consumed by
//! downstream indexers and must not change shape.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The semantic effect of a decoded transaction.
///
/// A plain value transfer carries only `sender`/`receiver`/`value`.
/// A smart-contract call additionally carries `function_name` and
/// `function_args` (always both or neither). Token movements carry
/// `transfers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedMetadata {
    pub sender: String,
    pub receiver: String,
    #[serde(with = "biguint_decimal")]
    pub value: BigUint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_args: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers: Option<Vec<Transfer>>,
}

/// One token movement inside a decoded transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(with = "biguint_decimal")]
    pub value: BigUint,
    pub properties: TransferProperties,
}

/// Tagging of a transfer: `token` for a fungible token in a
/// multi-transfer, `identifier` alone for a single-token transfer, and
/// `collection` + `identifier` (`"<collection>-<nonceHex>"`) for an
/// NFT-class transfer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl Transfer {
    /// A fungible transfer inside a multi-transfer, tagged with `token`.
    pub fn fungible(value: BigUint, token: String) -> Self {
        Self {
            value,
            properties: TransferProperties {
                token: Some(token),
                ..Default::default()
            },
        }
    }

    /// A single-token transfer, tagged with `identifier` only.
    pub fn single_token(value: BigUint, identifier: String) -> Self {
        Self {
            value,
            properties: TransferProperties {
                identifier: Some(identifier),
                ..Default::default()
            },
        }
    }

    /// An NFT-class transfer. The identifier is always
    /// `"<collection>-<nonceHex>"`.
    pub fn non_fungible(value: BigUint, collection: String, nonce_hex: &str) -> Self {
        let identifier = format!("{collection}-{nonce_hex}");
        Self {
            value,
            properties: TransferProperties {
                collection: Some(collection),
                identifier: Some(identifier),
                ..Default::default()
            },
        }
    }
}

/// Serialize a `BigUint` as a decimal string, matching the wire format
/// of the original API.
mod biguint_decimal {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
