#![no_main]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use libfuzzer_sys::fuzz_target;

use drt_decoder::{decode_transaction, RawTransaction};

// Decode arbitrary envelopes. The decoder must never panic: malformed
// input either degrades to a plain transfer or returns a DecodeError.
fuzz_target!(|input: (String, String, String, Option<Vec<u8>>)| {
    let (sender, receiver, value, payload) = input;

    // Well-formed base64 wrapping arbitrary payload bytes.
    let tx = RawTransaction {
        sender: sender.clone(),
        receiver,
        value,
        data: payload.map(|bytes| STANDARD.encode(bytes)),
    };
    let _ = decode_transaction(&tx);

    // Arbitrary (usually invalid) base64 in the data field.
    let tx = RawTransaction {
        data: Some(sender),
        ..tx
    };
    let _ = decode_transaction(&tx);
});
