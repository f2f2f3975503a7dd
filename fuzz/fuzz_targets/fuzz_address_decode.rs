#![no_main]

use libfuzzer_sys::fuzz_target;

use drt_codec::{decode_address, encode_address};

// Address decoding must never panic, and anything that decodes must
// re-encode to the same string.
fuzz_target!(|address: &str| {
    if let Ok(pubkey) = decode_address(address) {
        let reencoded = encode_address(&pubkey).unwrap();
        assert_eq!(reencoded, address.to_lowercase());
    }
});
