//! Byte decoding with Latin-1 fallback.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::mem::decode_latin1;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encoding the input was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value,
    /// including the C1 controls at 0x80..=0x9F.
    Latin1,
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceEncoding::Utf8 => write!(f, "UTF-8"),
            SourceEncoding::Latin1 => write!(f, "Latin-1"),
        }
    }
}

/// Decodes export bytes as UTF-8, falling back to Latin-1.
///
/// A UTF-8 byte-order mark is dropped. Latin-1 assigns a character to every
/// byte, so decoding never fails.
pub fn decode(bytes: &[u8]) -> (Cow<'_, str>, SourceEncoding) {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(body) {
        Ok(text) => (Cow::Borrowed(text), SourceEncoding::Utf8),
        Err(utf8_err) => {
            debug!(
                valid_up_to = utf8_err.valid_up_to(),
                "input is not UTF-8, retrying as Latin-1"
            );
            (decode_latin1(body), SourceEncoding::Latin1)
        }
    }
}
