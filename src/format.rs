//! Component F: payload formatters.
//!
//! Grounded on the source's `prepare_msg_numeric`/`prepare_msg_alpha`/
//! `prepare_msg_binary`. Function 2 is canonicalized as binary (the
//! source's `switch` falls through from case 2 into case 3 without a
//! `break`, so in the original it renders as *both* binary and alpha;
//! this implementation picks binary, per the open question in the
//! design notes).

use bitvec::prelude::*;

use crate::charset::Charset;
use crate::constants::{ALPHA_TERMINATORS, NUMERIC_TABLE};

/// Render the nibble buffer as a numeric string: one character per
/// nibble via the fixed conversion table, high nibble of each byte
/// first.
pub fn format_numeric(buffer: &[u8], num_nibbles: usize) -> String {
    let mut out = String::with_capacity(num_nibbles);
    let mut remaining = num_nibbles;
    let mut i = 0;
    while remaining > 0 {
        let byte = buffer[i];
        out.push(NUMERIC_TABLE[(byte >> 4) as usize & 0xf] as char);
        remaining -= 1;
        if remaining > 0 {
            out.push(NUMERIC_TABLE[(byte & 0xf) as usize] as char);
            remaining -= 1;
        }
        i += 1;
    }
    out
}

/// Render the nibble buffer as comma-separated two-hex-digit bytes, one
/// byte per two nibbles. A trailing odd nibble is kept, zero-padded into
/// its own byte (`append_5_nibbles` always leaves an even nibble count
/// within a byte boundary, but the last nibble of an odd-length message
/// still occupies a full high nibble that must be rendered).
pub fn format_binary(buffer: &[u8], num_nibbles: usize) -> String {
    let num_bytes = (num_nibbles + 1) / 2;
    buffer[..num_bytes]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the nibble buffer as 7-bit alphanumeric text: the nibble
/// stream is reinterpreted as a big-endian bit stream, split into 7-bit
/// characters, each bit-reversed within its byte, trailing terminator
/// bytes stripped, and the survivors mapped through `charset`. A
/// trailing partial (<7 bit) character is discarded.
pub fn format_alpha(buffer: &[u8], num_nibbles: usize, charset: &Charset) -> String {
    let raw = extract_7bit_chars(buffer, num_nibbles);
    let trimmed = strip_terminators(&raw);
    charset.translate_all(trimmed)
}

/// Pull 7-bit characters out of the nibble stream, bit-reversing each
/// within its byte the way the source does with the swap-4/swap-2/
/// swap-1 sequence on `(x << 1)`. A trailing partial (<7 bit) group is
/// discarded by `chunks_exact`.
fn extract_7bit_chars(buffer: &[u8], num_nibbles: usize) -> Vec<u8> {
    let num_bytes = (num_nibbles + 1) / 2;
    let bits = &buffer[..num_bytes].view_bits::<Msb0>()[..num_nibbles * 4];

    bits.chunks_exact(7)
        .map(|chunk| {
            let mut curchr = 0u8;
            for (i, bit) in chunk.iter().enumerate() {
                curchr |= (*bit as u8) << i;
            }
            curchr
        })
        .collect()
}

fn strip_terminators(chars: &[u8]) -> &[u8] {
    let mut end = chars.len();
    while end > 0 && ALPHA_TERMINATORS.contains(&chars[end - 1]) {
        end -= 1;
    }
    &chars[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CharsetEncoding, CharsetVariant};

    fn pack(nibbles: &[u8]) -> (Vec<u8>, usize) {
        let mut buffer = vec![0u8; 64];
        for (i, chunk) in nibbles.chunks(2).enumerate() {
            let hi = chunk[0];
            let lo = chunk.get(1).copied().unwrap_or(0);
            buffer[i] = (hi << 4) | lo;
        }
        (buffer, nibbles.len())
    }

    #[test]
    fn numeric_table_lookup_matches_scenario() {
        // nibbles [1,2,3,4,5] -> table indices 1,2,3,4,5 -> "84 2."
        let (buffer, n) = pack(&[1, 2, 3, 4, 5]);
        assert_eq!(format_numeric(&buffer, n), "84 2.");
    }

    #[test]
    fn numeric_output_length_equals_num_nibbles() {
        let (buffer, n) = pack(&[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(format_numeric(&buffer, n).chars().count(), n);
    }

    #[test]
    fn binary_keeps_trailing_odd_nibble_zero_padded() {
        let (buffer, n) = pack(&[0xd, 0xe, 0xa, 0xd, 0xb]);
        assert_eq!(format_binary(&buffer, n), "de,ad,b0");
    }

    #[test]
    fn binary_full_bytes_render_as_hex() {
        let (buffer, n) = pack(&[0xd, 0xe, 0xa, 0xd, 0xb, 0x0]);
        assert_eq!(format_binary(&buffer, n), "de,ad,b0");
    }

    #[test]
    fn alpha_strips_terminators_and_translates() {
        // "HI" followed by three NUL terminators, bit-reversed into the
        // nibble stream the way the encoder would produce it.
        let charset = Charset::new(CharsetVariant::Us, CharsetEncoding::Utf8);
        let nibbles = alpha_encode_nibbles(b"HI\0\0\0");
        let (buffer, n) = pack(&nibbles);
        assert_eq!(format_alpha(&buffer, n, &charset), "HI");
    }

    /// Test-only inverse of the bit-reversal/packing `extract_7bit_chars`
    /// performs, used to construct nibble streams for known ASCII text.
    /// Working backward from the decoder's transform
    /// `char = reverse_bits_8(raw7 << 1)`, the raw 7 bits embedded in the
    /// stream for a target ASCII byte are `reverse_bits_7(byte)`.
    fn alpha_encode_nibbles(text: &[u8]) -> Vec<u8> {
        fn reverse7(byte: u8) -> u8 {
            let x = byte & 0x7f;
            let mut r = 0u8;
            for i in 0..7 {
                r |= ((x >> i) & 1) << (6 - i);
            }
            r
        }

        let mut bitstream: Vec<u8> = Vec::new(); // one bit per entry, MSB-first accumulation
        for &byte in text {
            let raw7 = reverse7(byte);
            for bit in (0..7).rev() {
                bitstream.push((raw7 >> bit) & 1);
            }
        }
        while bitstream.len() % 4 != 0 {
            bitstream.push(0);
        }
        bitstream
            .chunks(4)
            .map(|chunk| {
                let mut nibble = 0u8;
                for (i, &bit) in chunk.iter().enumerate() {
                    nibble |= bit << (3 - i);
                }
                nibble
            })
            .collect()
    }
}
