//! Byte-level conversion between identifier values and text.
//!
//! Parsing is driven entirely by input length, see [`parse`]. Hex pairs are decoded through
//! [`HEX_VALUES`], a table indexed by raw byte value, so every input byte is looked up once and
//! never matched against character ranges.

use crate::{UuidError, UuidResult};

/// Length of the canonical dashed form.
pub const CANONICAL_LEN: usize = 36;
/// Length of the raw form (hex digits only).
pub const RAW_LEN: usize = 32;
/// Length of the brace-wrapped form.
pub const BRACED_LEN: usize = CANONICAL_LEN + 2;
/// Length of the URN form.
pub const URN_LEN: usize = URN_PREFIX.len() + CANONICAL_LEN;

/// Prefix of the URN form. Matched case-insensitively.
pub const URN_PREFIX: &[u8; 9] = b"urn:uuid:";

/// Group separator written by [`encode`] and required by the dashed forms.
pub const SEPARATOR: u8 = b'-';

/// Marks a byte in [`HEX_VALUES`] that is not a hex digit.
pub const INVALID_HEX: u8 = 0xff;

/// Hex digit value of every byte, or [`INVALID_HEX`].
pub static HEX_VALUES: [u8; 256] = hex_values();

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

// Offset of each byte's hex pair in the canonical form.
const PAIR_OFFSETS: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

const SEPARATOR_OFFSETS: [usize; 4] = [8, 13, 18, 23];

const fn hex_values() -> [u8; 256] {
    let mut table = [INVALID_HEX; 256];
    let mut i = 0;
    while i < table.len() {
        let b = i as u8;
        table[i] = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => INVALID_HEX,
        };
        i += 1;
    }
    table
}

/// Converts the hex digits `hi` and `lo` into a byte.
#[inline]
fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let h = HEX_VALUES[usize::from(hi)];
    let l = HEX_VALUES[usize::from(lo)];
    if h == INVALID_HEX || l == INVALID_HEX {
        return None;
    }
    Some((h << 4) | l)
}

/// Encodes `bytes` into the canonical form as ASCII.
///
/// Groups hold bytes 0-3, 4-5, 6-7, 8-9 and 10-15, joined by [`SEPARATOR`].
pub fn encode(bytes: &[u8; 16]) -> [u8; CANONICAL_LEN] {
    let mut out = [SEPARATOR; CANONICAL_LEN];
    for (&byte, &offset) in bytes.iter().zip(PAIR_OFFSETS.iter()) {
        out[offset] = HEX_DIGITS[usize::from(byte >> 4)];
        out[offset + 1] = HEX_DIGITS[usize::from(byte & 0x0f)];
    }
    out
}

/// Formats `bytes` as the 36-character canonical string.
pub fn format(bytes: &[u8; 16]) -> String {
    encode(bytes).iter().map(|&b| char::from(b)).collect()
}

/// Parses any accepted textual form into 16 bytes.
///
/// The form is chosen by length:
/// - 32: raw hex digits.
/// - 36: canonical dashed form.
/// - 38: brace-wrapped dashed form. Only the leading byte is discarded; the trailing byte is
///   never inspected.
/// - 45: `urn:uuid:` followed by the dashed form.
///
/// # Errors
///
/// - [`UuidError::InvalidLength`] for any other length.
/// - [`UuidError::InvalidPrefix`] if a 45-byte input does not start with `urn:uuid:`.
/// - [`UuidError::InvalidFormat`] if a separator is missing or a pair is not hex.
pub fn parse(input: &[u8]) -> UuidResult<[u8; 16]> {
    let dashed = match input.len() {
        RAW_LEN => return decode_raw(input),
        CANONICAL_LEN => input,
        BRACED_LEN => &input[1..=CANONICAL_LEN],
        URN_LEN => {
            let (prefix, rest) = input.split_at(URN_PREFIX.len());
            if !prefix.eq_ignore_ascii_case(URN_PREFIX) {
                let mut found = [0u8; URN_PREFIX.len()];
                found.copy_from_slice(prefix);
                return Err(UuidError::InvalidPrefix(found));
            }
            rest
        }
        len => return Err(UuidError::InvalidLength(len)),
    };
    decode_dashed(dashed)
}

// `input` is exactly RAW_LEN bytes.
fn decode_raw(input: &[u8]) -> UuidResult<[u8; 16]> {
    let mut bytes = [0u8; 16];
    for (byte, pair) in bytes.iter_mut().zip(input.chunks_exact(2)) {
        *byte = hex_pair(pair[0], pair[1]).ok_or(UuidError::InvalidFormat)?;
    }
    Ok(bytes)
}

// `input` is exactly CANONICAL_LEN bytes.
fn decode_dashed(input: &[u8]) -> UuidResult<[u8; 16]> {
    if SEPARATOR_OFFSETS.iter().any(|&i| input[i] != SEPARATOR) {
        return Err(UuidError::InvalidFormat);
    }

    let mut bytes = [0u8; 16];
    for (byte, &offset) in bytes.iter_mut().zip(PAIR_OFFSETS.iter()) {
        *byte = hex_pair(input[offset], input[offset + 1]).ok_or(UuidError::InvalidFormat)?;
    }
    Ok(bytes)
}
