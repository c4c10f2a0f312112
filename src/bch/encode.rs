//! Reference BCH(31,21) encoder.
//!
//! Not exercised by the receiver itself (POCSAG is a receive-only
//! concern here, per scope), but kept as the test suite's round-trip
//! partner — grounded the same way the teacher crate keeps `ldpc::encode`
//! alongside `ldpc::decode` purely so tests can construct valid
//! codewords.

use super::syndrome::{bch_divide, odd_parity};
use crate::constants::{BCH_K, BCH_N};

/// Encode 21 payload bits (held in the low 21 bits of `payload`) into a
/// full 32-bit POCSAG codeword: 21 payload bits, 10 BCH check bits, and
/// one overall even-parity bit.
pub fn encode(payload: u32) -> u32 {
    let payload = payload & 0x1f_ffff;
    let frame = payload << (BCH_N - BCH_K); // payload in the high 21 bits of the 31-bit frame
    let check = bch_divide(frame) & ((1 << (BCH_N - BCH_K)) - 1);
    let frame = frame | check;
    let mut word = frame << 1; // shift the 31-bit frame back into bits 31..1
    if odd_parity(word) {
        word |= 1;
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bch::is_valid;

    #[test]
    fn encoded_zero_payload_is_valid() {
        assert!(is_valid(encode(0)));
    }

    #[test]
    fn every_single_payload_bit_encodes_to_a_valid_codeword() {
        for bit in 0..21 {
            assert!(is_valid(encode(1 << bit)), "payload bit {bit}");
        }
    }

    #[test]
    fn random_payloads_encode_to_valid_codewords() {
        use rand::Rng;
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let payload: u32 = rng.random::<u32>() & 0x1f_ffff;
            assert!(is_valid(encode(payload)), "payload {payload:#x}");
        }
    }
}
