//! Single-token (`DCDTTransfer`) classification.

use drt_codec as codec;
use drt_types::{DecodeError, DecodedMetadata, Transfer};

const FUNCTION_NAME: &str = "DCDTTransfer";

/// Reinterpret a `DCDTTransfer` call as a structured token transfer.
///
/// Argument layout: token identifier (hex text), amount, then an
/// optional nested call (function name at arg 2, its arguments after).
/// Returns `Ok(None)` when the metadata is not this kind of call.
pub(crate) fn classify(metadata: &DecodedMetadata) -> Result<Option<DecodedMetadata>, DecodeError> {
    let (Some(name), Some(args)) = (&metadata.function_name, &metadata.function_args) else {
        return Ok(None);
    };
    if name.as_str() != FUNCTION_NAME || args.len() < 2 {
        return Ok(None);
    }

    let token = codec::hex_to_text(&args[0]);
    let value = codec::hex_to_biguint(&args[1])?;

    let mut result = DecodedMetadata {
        sender: metadata.sender.clone(),
        receiver: metadata.receiver.clone(),
        value: value.clone(),
        transfers: Some(vec![Transfer::single_token(value, token)]),
        ..Default::default()
    };
    if args.len() > 2 {
        result.function_name = Some(codec::hex_to_text(&args[2]));
        result.function_args = Some(args[3..].to_vec());
    }
    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn call(name: &str, args: &[&str]) -> DecodedMetadata {
        DecodedMetadata {
            sender: "drt1sender".into(),
            receiver: "drt1receiver".into(),
            function_name: Some(name.into()),
            function_args: Some(args.iter().map(|a| a.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn declines_other_functions_and_short_args() {
        assert!(classify(&call("swap", &["414243", "0a"])).unwrap().is_none());
        assert!(classify(&call(FUNCTION_NAME, &["414243"])).unwrap().is_none());
        assert!(classify(&DecodedMetadata::default()).unwrap().is_none());
    }

    #[test]
    fn two_args_produce_a_transfer_without_nested_call() {
        // "414243-313233" is hex for "ABC-123".
        let meta = classify(&call(FUNCTION_NAME, &["4142432d313233", "0a"]))
            .unwrap()
            .unwrap();
        assert_eq!(meta.sender, "drt1sender");
        assert_eq!(meta.receiver, "drt1receiver");
        assert_eq!(meta.value, BigUint::from(10u32));
        assert!(meta.function_name.is_none());
        assert!(meta.function_args.is_none());

        let transfers = meta.transfers.unwrap();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].value, BigUint::from(10u32));
        assert_eq!(transfers[0].properties.identifier.as_deref(), Some("ABC-123"));
        assert!(transfers[0].properties.token.is_none());
        assert!(transfers[0].properties.collection.is_none());
    }

    #[test]
    fn extra_args_survive_as_nested_call() {
        // hex("swapTokensFixedInput") nested after the transfer args.
        let nested = hex::encode("swapTokensFixedInput");
        let meta = classify(&call(FUNCTION_NAME, &["414243", "05", &nested, "0a", "0b"]))
            .unwrap()
            .unwrap();
        assert_eq!(meta.function_name.as_deref(), Some("swapTokensFixedInput"));
        assert_eq!(
            meta.function_args.as_deref(),
            Some(&["0a".to_string(), "0b".to_string()][..])
        );
    }

    #[test]
    fn reclassifying_own_output_declines() {
        let meta = classify(&call(FUNCTION_NAME, &["414243", "0a"]))
            .unwrap()
            .unwrap();
        assert!(classify(&meta).unwrap().is_none());
    }
}
