//! Component G: the 7-bit charset translator.
//!
//! Grounded on the source's `trtab`/`pocsag_init_charset`/
//! `translate_alpha`: a 128-entry table mapping each 7-bit code to a
//! printable string, with national-variant remaps at the ISO-646
//! positions `0x23, 0x24, 0x40, 0x5B-0x60, 0x7B-0x7E`.

use crate::config::{CharsetEncoding, CharsetVariant};

/// US-ASCII default table: control codes as bracketed mnemonics or
/// escape sequences, printable ASCII as itself.
const fn base_table() -> [&'static str; 128] {
    [
        "<NUL>", "<SOH>", "<STX>", "<ETX>", "<EOT>", "<ENQ>", "<ACK>", "\\g", "<BS>", "\\t", "\\n",
        "<VT>", "<FF>", "\\r", "<SO>", "<SI>", "<DLE>", "<DC1>", "<DC2>", "<DC3>", "<DC4>", "<NAK>",
        "<SYN>", "<ETB>", "<CAN>", "<EM>", "<SUB>", "<ESC>", "<FS>", "<GS>", "<RS>", "<US>", " ",
        "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/", "0", "1", "2",
        "3", "4", "5", "6", "7", "8", "9", ":", ";", "<", "=", ">", "?", "@", "A", "B", "C", "D",
        "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V",
        "W", "X", "Y", "Z", "[", "\\", "]", "^", "_", "`", "a", "b", "c", "d", "e", "f", "g", "h",
        "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
        "{", "|", "}", "~", "<DEL>",
    ]
}

/// A fully-resolved translation table for one (variant, encoding) pair.
pub struct Charset {
    table: [String; 128],
}

impl Charset {
    /// Build the translation table for `variant`, rendering extended
    /// glyphs in `encoding`.
    pub fn new(variant: CharsetVariant, encoding: CharsetEncoding) -> Self {
        let mut table: [String; 128] = base_table().map(String::from);
        for &(index, utf8, latin1, ascii) in national_overrides(variant) {
            table[index] = match encoding {
                CharsetEncoding::Utf8 => utf8.to_string(),
                CharsetEncoding::Latin1 => latin1.to_string(),
                CharsetEncoding::Transliterate => ascii.to_string(),
            };
        }
        Self { table }
    }

    /// Translate a 7-bit code (only the low 7 bits are consulted).
    pub fn translate(&self, chr: u8) -> &str {
        &self.table[(chr & 0x7f) as usize]
    }

    /// Translate a whole sequence of 7-bit codes, concatenating each
    /// glyph's translation.
    pub fn translate_all(&self, codes: &[u8]) -> String {
        let mut out = String::with_capacity(codes.len());
        for &c in codes {
            out.push_str(self.translate(c));
        }
        out
    }
}

/// National-variant overrides as `(index, utf8, latin1, 7-bit-ascii)`.
/// Latin-1 bytes are expressed as their `\u{..}` scalar since Rust string
/// literals are UTF-8; the `CharsetEncoding::Latin1` caller is expected to
/// re-encode to single Latin-1 bytes on output where that differs from
/// ASCII-range text (all overrides below are single Unicode scalars with
/// a direct Latin-1 codepoint).
fn national_overrides(variant: CharsetVariant) -> &'static [(usize, &'static str, &'static str, &'static str)] {
    match variant {
        CharsetVariant::Us => &[],
        CharsetVariant::De => &[
            (0x5b, "Ä", "Ä", "AE"),
            (0x5c, "Ö", "Ö", "OE"),
            (0x5d, "Ü", "Ü", "UE"),
            (0x7b, "ä", "ä", "ae"),
            (0x7c, "ö", "ö", "oe"),
            (0x7d, "ü", "ü", "ue"),
            (0x7e, "ß", "ß", "ss"),
        ],
        CharsetVariant::Se => &[
            (0x5b, "Ä", "Ä", "AE"),
            (0x5c, "Ö", "Ö", "OE"),
            (0x5d, "Å", "Å", "AO"),
            (0x7b, "ä", "ä", "ae"),
            (0x7c, "ö", "ö", "oe"),
            (0x7d, "å", "å", "ao"),
        ],
        CharsetVariant::Fr => &[
            (0x24, "£", "£", "GBP"),
            (0x40, "à", "à", "a"),
            (0x5b, "°", "°", "deg"),
            (0x5c, "ç", "ç", "c"),
            (0x5d, "§", "§", "para"),
            (0x60, "µ", "µ", "u"),
            (0x7b, "é", "é", "e"),
            (0x7c, "ù", "ù", "u"),
            (0x7d, "è", "è", "e"),
            (0x7e, "¨", "¨", "\""),
        ],
        CharsetVariant::Si => &[
            (0x40, "Ž", "Ž", "Z"),
            (0x5b, "Š", "Š", "S"),
            (0x5d, "Ć", "Ć", "C"),
            (0x5e, "Č", "Č", "C"),
            (0x60, "ž", "ž", "z"),
            (0x7b, "š", "š", "s"),
            (0x7d, "ć", "ć", "c"),
            (0x7e, "č", "č", "c"),
        ],
    }
}
