//! NFT / SFT (`DCDTNFTTransfer`) classification.

use drt_codec as codec;
use drt_types::{DecodeError, DecodedMetadata, Transfer};

const FUNCTION_NAME: &str = "DCDTNFTTransfer";

/// Reinterpret a `DCDTNFTTransfer` call as a structured NFT transfer.
///
/// The chain convention is a self-addressed call: sender == receiver,
/// with the real receiver as the fourth argument. Argument layout:
/// collection (hex text), nonce (raw hex), amount, receiver public key,
/// then an optional nested call.
pub(crate) fn classify(metadata: &DecodedMetadata) -> Result<Option<DecodedMetadata>, DecodeError> {
    if metadata.sender != metadata.receiver {
        return Ok(None);
    }
    let (Some(name), Some(args)) = (&metadata.function_name, &metadata.function_args) else {
        return Ok(None);
    };
    if name.as_str() != FUNCTION_NAME || args.len() < 4 || !codec::is_address_bytes(&args[3]) {
        return Ok(None);
    }

    let collection = codec::hex_to_text(&args[0]);
    let nonce_hex = &args[1];
    let value = codec::hex_to_biguint(&args[2])?;

    let mut result = DecodedMetadata {
        sender: metadata.sender.clone(),
        receiver: codec::encode_address_hex(&args[3])?,
        value: value.clone(),
        transfers: Some(vec![Transfer::non_fungible(value, collection, nonce_hex)]),
        ..Default::default()
    };
    if args.len() > 4 {
        result.function_name = Some(codec::hex_to_text(&args[4]));
        result.function_args = Some(args[5..].to_vec());
    }
    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drt_codec::encode_address;
    use num_bigint::BigUint;

    const RECEIVER_KEY: [u8; 32] = [7u8; 32];

    fn self_call(args: &[&str]) -> DecodedMetadata {
        DecodedMetadata {
            sender: "drt1self".into(),
            receiver: "drt1self".into(),
            function_name: Some(FUNCTION_NAME.into()),
            function_args: Some(args.iter().map(|a| a.to_string()).collect()),
            ..Default::default()
        }
    }

    fn nft_args() -> Vec<String> {
        // collection "MOS-b9b4b2", nonce 0x2710, amount 1, receiver key.
        vec![
            hex::encode("MOS-b9b4b2"),
            "2710".to_string(),
            "01".to_string(),
            hex::encode(RECEIVER_KEY),
        ]
    }

    #[test]
    fn declines_unless_self_addressed() {
        let args = nft_args();
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let mut meta = self_call(&refs);
        meta.receiver = "drt1other".into();
        assert!(classify(&meta).unwrap().is_none());
    }

    #[test]
    fn declines_on_short_args_or_bad_receiver_bytes() {
        assert!(classify(&self_call(&["4d4f53", "2710", "01"])).unwrap().is_none());
        // arg3 is hex but only 2 bytes, not an address.
        assert!(classify(&self_call(&["4d4f53", "2710", "01", "0a0b"]))
            .unwrap()
            .is_none());
    }

    #[test]
    fn match_redirects_receiver_and_composes_identifier() {
        let args = nft_args();
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let meta = classify(&self_call(&refs)).unwrap().unwrap();

        assert_eq!(meta.sender, "drt1self");
        assert_eq!(meta.receiver, encode_address(&RECEIVER_KEY).unwrap());
        assert_eq!(meta.value, BigUint::from(1u32));
        assert!(meta.function_name.is_none());

        let transfers = meta.transfers.unwrap();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].properties.collection.as_deref(), Some("MOS-b9b4b2"));
        assert_eq!(
            transfers[0].properties.identifier.as_deref(),
            Some("MOS-b9b4b2-2710")
        );
        assert!(transfers[0].properties.token.is_none());
    }

    #[test]
    fn extra_args_survive_as_nested_call() {
        let mut args = nft_args();
        args.push(hex::encode("bid"));
        args.push("0de0b6b3a7640000".to_string());
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let meta = classify(&self_call(&refs)).unwrap().unwrap();

        assert_eq!(meta.function_name.as_deref(), Some("bid"));
        assert_eq!(
            meta.function_args.as_deref(),
            Some(&["0de0b6b3a7640000".to_string()][..])
        );
    }

    #[test]
    fn reclassifying_own_output_declines() {
        let args = nft_args();
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let meta = classify(&self_call(&refs)).unwrap().unwrap();
        // Receiver was redirected, so the self-addressed gate fails too.
        assert!(classify(&meta).unwrap().is_none());
    }
}
