//! Decoding of legacy 8-bit Kruti Dev text.
//!
//! Kruti Dev glyph codes are the bytes 0x20–0xFF of a Windows-1252 code page, so text that
//! was extracted as raw bytes rather than UTF-8 decodes with that encoding.

use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;
use log::debug;

/// Decode `bytes` as UTF-8, falling back to Windows-1252 when they are not valid UTF-8.
///
/// Every byte sequence decodes, so this never fails.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(err) => {
            debug!(
                "input is not UTF-8 ({}), decoding as {}",
                err,
                WINDOWS_1252.name()
            );
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}
