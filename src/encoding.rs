//! Text encodings tried when reading talk exports.
//!
//! Exports saved by recent apps are UTF-8, while older Windows exports are
//! frequently Shift_JIS (code page 932). Decoding is an ordered candidate
//! list: each [`TextEncoding`] is tried in turn and the first one that
//! decodes the whole file without a malformed sequence wins. Nothing is ever
//! decoded with replacement characters, so a wrong guess can't silently
//! produce garbage.
//!
//! # Example
//!
//! ```rust
//! use talkrank::encoding::{TextEncoding, decode};
//!
//! // "こんにちは" in Shift_JIS is not valid UTF-8
//! let sjis = [0x82, 0xb1, 0x82, 0xf1, 0x82, 0xc9, 0x82, 0xbf, 0x82, 0xcd];
//! let (text, used) = decode(&sjis, TextEncoding::default_candidates()).unwrap();
//!
//! assert_eq!(text, "こんにちは");
//! assert_eq!(used, TextEncoding::ShiftJis);
//! ```

use std::borrow::Cow;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// A text encoding talkrank can read exports in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8, the primary encoding
    #[default]
    Utf8,

    /// Shift_JIS as written by Windows (CP932 / Windows-31J)
    #[serde(alias = "cp932", alias = "sjis")]
    ShiftJis,

    /// EUC-JP, found in some exports made on older Unix systems
    EucJp,
}

impl TextEncoding {
    /// Primary encoding followed by the documented legacy fallback.
    pub fn default_candidates() -> &'static [TextEncoding] {
        &[TextEncoding::Utf8, TextEncoding::ShiftJis]
    }

    /// Returns all accepted names (including aliases).
    pub fn all_names() -> &'static [&'static str] {
        &[
            "utf-8",
            "utf8",
            "shift-jis",
            "shift_jis",
            "sjis",
            "cp932",
            "windows-31j",
            "euc-jp",
            "eucjp",
        ]
    }

    /// Returns the underlying `encoding_rs` codec.
    pub fn codec(&self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => encoding_rs::UTF_8,
            TextEncoding::ShiftJis => encoding_rs::SHIFT_JIS,
            TextEncoding::EucJp => encoding_rs::EUC_JP,
        }
    }

    /// Decodes `bytes` strictly, returning `None` on any malformed sequence.
    ///
    /// A byte order mark is kept as an ordinary character. Shift_JIS also
    /// accepts the single bytes Windows adds on top of the web standard,
    /// see [`decode_cp932`].
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            TextEncoding::ShiftJis => decode_cp932(bytes),
            _ => self
                .codec()
                .decode_without_bom_handling_and_without_replacement(bytes),
        }
    }
}

fn is_shift_jis_lead(byte: u8) -> bool {
    matches!(byte, 0x81..=0x9F | 0xE0..=0xFC)
}

/// Single bytes CP932 maps to private-use characters while the WHATWG
/// Shift_JIS decoder rejects them.
fn cp932_single_byte(byte: u8) -> Option<char> {
    match byte {
        0xA0 => Some('\u{F8F0}'),
        0xFD => Some('\u{F8F1}'),
        0xFE => Some('\u{F8F2}'),
        0xFF => Some('\u{F8F3}'),
        _ => None,
    }
}

/// Strict Shift_JIS decoding with the CP932 (Windows-31J) single-byte
/// extensions.
///
/// `encoding_rs` implements the WHATWG decoder, which already covers the
/// NEC and IBM extension rows but fails on `0xA0` and `0xFD..=0xFF`.
/// Those bytes only count as characters in lead position; `0xA0` after a
/// lead byte is an ordinary trail byte.
///
/// ```
/// use talkrank::encoding::decode_cp932;
///
/// assert_eq!(decode_cp932(b"a\n\xfd\n").as_deref(), Some("a\n\u{f8f1}\n"));
/// assert_eq!(decode_cp932(&[0x81, 0xa0]).as_deref(), Some("□"));
/// ```
pub fn decode_cp932(bytes: &[u8]) -> Option<Cow<'_, str>> {
    let codec = encoding_rs::SHIFT_JIS;
    let mut text: Option<String> = None;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if is_shift_jis_lead(byte) {
            i += 2;
            continue;
        }
        if let Some(c) = cp932_single_byte(byte) {
            let out = text.get_or_insert_with(|| String::with_capacity(bytes.len()));
            out.push_str(&codec.decode_without_bom_handling_and_without_replacement(&bytes[start..i])?);
            out.push(c);
            start = i + 1;
        }
        i += 1;
    }

    match text {
        None => codec.decode_without_bom_handling_and_without_replacement(bytes),
        Some(mut out) => {
            out.push_str(&codec.decode_without_bom_handling_and_without_replacement(&bytes[start..])?);
            Some(Cow::Owned(out))
        }
    }
}

/// Tries each candidate in order; the first successful decoding wins.
///
/// Returns the text together with the encoding that produced it, or
/// [`IngestError::Undecodable`] listing every encoding that was attempted.
pub fn decode<'a>(
    bytes: &'a [u8],
    candidates: &[TextEncoding],
) -> Result<(Cow<'a, str>, TextEncoding), IngestError> {
    for &encoding in candidates {
        if let Some(text) = encoding.decode(bytes) {
            return Ok((text, encoding));
        }
    }

    Err(IngestError::Undecodable {
        tried: candidates.to_vec(),
    })
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "UTF-8"),
            TextEncoding::ShiftJis => write!(f, "Shift_JIS"),
            TextEncoding::EucJp => write!(f, "EUC-JP"),
        }
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "shift-jis" | "shift_jis" | "sjis" | "cp932" | "windows-31j" => {
                Ok(TextEncoding::ShiftJis)
            }
            "euc-jp" | "eucjp" => Ok(TextEncoding::EucJp),
            _ => Err(format!(
                "Unknown encoding: '{}'. Expected one of: {}",
                s,
                TextEncoding::all_names().join(", ")
            )),
        }
    }
}
