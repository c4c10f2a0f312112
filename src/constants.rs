//! Fixed protocol constants for POCSAG, reproduced bit-exactly from the
//! reference decoder (multimon-ng's `pocsag.c`).

/// Batch synchronization codeword.
pub const POCSAG_SYNC: u32 = 0x7cd215d8;
/// Canonical idle codeword, used to pad unused word slots in a batch.
pub const POCSAG_IDLE: u32 = 0x7a89c197;
/// Alternate idle codeword accepted in practice alongside [`POCSAG_IDLE`].
pub const POCSAG_IDLE_ALT: u32 = 0x7a89c196;

/// Set in a codeword's MSB when the word carries message data rather than
/// an address.
pub const POCSAG_MESSAGE_DETECTION: u32 = 0x8000_0000;

/// (31,21) BCH generator polynomial, octal `03551`.
pub const BCH_POLY: u32 = 0o3551;
/// BCH codeword length in bits.
pub const BCH_N: u32 = 31;
/// BCH information-bit length.
pub const BCH_K: u32 = 21;

/// CRC-10 generator used by the standalone word-log sanity check
/// (`tools/pocsag_crc.c`). Distinct from the BCH syndrome that actually
/// drives error correction; kept only for the optional word log.
pub const WORDLOG_CRC_GENERATOR: u32 = 0x0769;

/// Number of codewords in a batch.
pub const BATCH_WORDS: u32 = 16;

/// Nibble-to-character table for the numeric payload format.
pub const NUMERIC_TABLE: &[u8; 16] = b"084 2.6]195-3U7[";

/// ASCII control codes stripped from the trailing end of an alphanumeric
/// payload once bit-reversal has recovered the raw 7-bit characters.
pub const ALPHA_TERMINATORS: [u8; 5] = [0x00, 0x03, 0x04, 0x17, 0x19];

/// Maximum nibbles a pending message buffer may hold before it is flushed
/// to make room for more. Matches the source's guard
/// `numnibbles > sizeof(buffer)*2 - 5`, i.e. flush once appending five
/// more nibbles would leave fewer than 5 nibbles of headroom.
pub const MAX_BUFFER_BYTES: usize = 256;
