//! Component I: receiver configuration.
//!
//! The reference decoder keeps `pocsag_invert_input`, `pocsag_error_
//! correction`, and friends as process-global mutables set by CLI flag
//! parsing. Per the design notes this crate threads an explicit
//! [`ReceiverConfig`] into the receiver at construction instead, the way
//! the teacher crate threads `DecoderConfig` into `decode_ft8`.

use crate::error::CharsetError;
use std::path::PathBuf;

/// Maximum number of BCH bits the repair step is allowed to correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// Detect errors but never attempt correction.
    None,
    /// Correct single-bit errors only.
    OneBit,
    /// Correct single- and double-bit errors.
    #[default]
    TwoBit,
}

/// National ISO-646 charset variant selecting the alphanumeric
/// translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharsetVariant {
    /// US / IRV (1991) — the default.
    #[default]
    Us,
    De,
    Se,
    Fr,
    Si,
}

/// Output encoding for glyphs outside 7-bit ASCII, selected at
/// construction rather than at build time as the source does with its
/// `CHARSET_UTF8`/`CHARSET_LATIN1` macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharsetEncoding {
    #[default]
    Utf8,
    Latin1,
    Transliterate,
}

/// Receiver-scoped configuration, constructed once and owned by the
/// receiver for its whole lifetime.
#[derive(Debug, Clone)]
pub struct ReceiverConfig {
    /// Complement the full 32-bit window before state-machine dispatch.
    pub invert_input: bool,
    /// Maximum BCH correction effort.
    pub error_correction: ErrorCorrection,
    /// Suppress messages whose address/function was never received, or
    /// that were flushed without sync.
    pub show_partial_decodes: bool,
    /// Suppress messages with zero accumulated nibbles.
    pub prune_empty: bool,
    /// Alphanumeric charset variant.
    pub charset: CharsetVariant,
    /// Output encoding for extended glyphs.
    pub charset_encoding: CharsetEncoding,
    /// Optional CSV word-log sink path.
    pub wordlog_path: Option<PathBuf>,
    /// Optional free-form debug trace sink path.
    pub debug_path: Option<PathBuf>,
    /// Name used only in emitted message text, mirroring the source's
    /// `dem_par->name`.
    pub name: String,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            invert_input: false,
            error_correction: ErrorCorrection::TwoBit,
            show_partial_decodes: false,
            prune_empty: false,
            charset: CharsetVariant::Us,
            charset_encoding: CharsetEncoding::Utf8,
            wordlog_path: None,
            debug_path: None,
            name: "POCSAG".to_string(),
        }
    }
}

impl CharsetVariant {
    /// Parse a charset name, returning [`CharsetError::UnknownVariant`]
    /// for anything other than `US`, `DE`, `SE`, `FR`, `SI` — mirroring
    /// the source's `pocsag_init_charset` return value.
    pub fn try_parse(name: &str) -> Result<Self, CharsetError> {
        match name {
            "US" => Ok(CharsetVariant::Us),
            "DE" => Ok(CharsetVariant::De),
            "SE" => Ok(CharsetVariant::Se),
            "FR" => Ok(CharsetVariant::Fr),
            "SI" => Ok(CharsetVariant::Si),
            other => Err(CharsetError::UnknownVariant {
                name: other.to_string(),
            }),
        }
    }

    /// Parse a charset name, logging a warning and falling back to `Us`
    /// on failure instead of propagating the error — matching the
    /// source's behavior of printing to stderr and continuing with `US`.
    pub fn parse(name: &str) -> Self {
        Self::try_parse(name).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to US charset");
            CharsetVariant::Us
        })
    }
}
