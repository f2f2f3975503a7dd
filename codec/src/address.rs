//! Bech32 address codec with the `drt` prefix.
//!
//! Address format: `drt1` + bech32(public_key, 52 chars) + checksum (6 chars).
//!
//! Standard bech32 (BIP-0173): 5-bit word packing over the 32-byte
//! public key, the `qpzry9x8gf2tvdw0s3jn54khce6mua7l` alphabet and the
//! BCH checksum. Downstream tooling depends on bit-for-bit
//! compatibility, so nothing here deviates from the reference
//! algorithm.

use drt_types::DecodeError;

/// Human-readable prefix for all DharitrI addresses.
pub const ADDRESS_HRP: &str = "drt";

/// Length of the raw public key behind every address.
pub const PUBKEY_BYTES: usize = 32;

/// Bech32 alphabet (32 chars, avoids visually ambiguous 1/b/i/o).
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const CHARSET_REV: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[CHARSET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// BCH checksum generator coefficients.
const GENERATOR: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(v);
        for (i, coeff) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= coeff;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(hrp.len() * 2 + 1);
    for b in hrp.bytes() {
        out.push(b >> 5);
    }
    out.push(0);
    for b in hrp.bytes() {
        out.push(b & 0x1f);
    }
    out
}

fn create_checksum(hrp: &str, data: &[u8]) -> [u8; 6] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; 6]);
    let pm = polymod(&values) ^ 1;
    let mut checksum = [0u8; 6];
    for (i, slot) in checksum.iter_mut().enumerate() {
        *slot = ((pm >> (5 * (5 - i))) & 0x1f) as u8;
    }
    checksum
}

fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == 1
}

/// Regroup bits between word sizes. Encoding pads the tail with zeros;
/// decoding rejects non-zero padding.
fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to) - 1;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);
    for &v in data {
        if u32::from(v) >> from != 0 {
            return None;
        }
        acc = (acc << from) | u32::from(v);
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & maxv) as u8);
        }
    }
    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return None;
    }
    Some(out)
}

/// Encode a 32-byte public key as a `drt1...` address.
pub fn encode_address(pubkey: &[u8]) -> Result<String, DecodeError> {
    if pubkey.len() != PUBKEY_BYTES {
        return Err(DecodeError::InvalidAddressBytes {
            expected: PUBKEY_BYTES,
            actual: pubkey.len(),
        });
    }
    // 8→5 with padding never fails for byte input.
    let words = convert_bits(pubkey, 8, 5, true).unwrap_or_default();
    let checksum = create_checksum(ADDRESS_HRP, &words);

    let mut address = String::with_capacity(ADDRESS_HRP.len() + 1 + words.len() + 6);
    address.push_str(ADDRESS_HRP);
    address.push('1');
    for w in words.iter().chain(checksum.iter()) {
        address.push(char::from(CHARSET[*w as usize]));
    }
    Ok(address)
}

/// Encode a hex-encoded 32-byte public key as a `drt1...` address.
pub fn encode_address_hex(pubkey_hex: &str) -> Result<String, DecodeError> {
    let bytes =
        hex::decode(pubkey_hex).map_err(|_| DecodeError::InvalidHex(pubkey_hex.to_string()))?;
    encode_address(&bytes)
}

/// Extract the public key bytes from a `drt1...` address.
///
/// Rejects a wrong prefix, invalid characters, a bad checksum, or a
/// data part that does not pack back into exactly 32 bytes. All-upper
/// input is accepted, mixed case is not (BIP-0173).
pub fn decode_address(address: &str) -> Result<[u8; PUBKEY_BYTES], DecodeError> {
    let invalid = || DecodeError::InvalidAddress(address.to_string());

    if address.bytes().any(|b| b.is_ascii_uppercase())
        && address.bytes().any(|b| b.is_ascii_lowercase())
    {
        return Err(invalid());
    }
    let lowered = address.to_lowercase();
    let (hrp, data_part) = lowered.split_once('1').ok_or_else(invalid)?;
    if hrp != ADDRESS_HRP || data_part.len() < 6 {
        return Err(invalid());
    }

    let mut words = Vec::with_capacity(data_part.len());
    for c in data_part.bytes() {
        if c >= 128 {
            return Err(invalid());
        }
        let v = CHARSET_REV[c as usize];
        if v == 0xFF {
            return Err(invalid());
        }
        words.push(v);
    }
    if !verify_checksum(hrp, &words) {
        return Err(invalid());
    }

    let payload = &words[..words.len() - 6];
    let bytes = convert_bits(payload, 5, 8, false).ok_or_else(invalid)?;
    bytes.try_into().map_err(|_| invalid())
}

/// True iff `pubkey_hex` decodes to exactly 32 address bytes.
pub fn is_address_bytes(pubkey_hex: &str) -> bool {
    matches!(hex::decode(pubkey_hex), Ok(bytes) if bytes.len() == PUBKEY_BYTES)
}
