#![warn(rust_2018_idioms)]

//! Transcoding of text set in the Kruti Dev 010 legacy font encoding to Unicode Devanagari.
//!
//! Kruti Dev maps Devanagari glyphs onto the code points of an 8-bit Latin code page, in the
//! order they are drawn rather than the order they are spoken. Transcoding runs a fixed
//! pipeline over each piece of text:
//!
//! 1. [`normalize()`] fixes known corruptions in the raw text.
//! 2. [`RuleTable::substitute`] applies the ordered rule table.
//! 3. [`resolve_pre_posed()`] moves pre-posed vowel signs after their consonant.
//! 4. [`resolve_reph()`] moves the reph before the base consonant of its syllable.
//! 5. [`cleanup()`] removes illegal mark sequences.
//!
//! ```
//! assert_eq!("भारत", krutidev::transcode("Hkkjr"));
//! ```

mod buffer;
pub mod cleanup;
pub mod devanagari;
pub mod error;
pub mod inspect;
pub mod legacy;
pub mod normalize;
pub mod reorder;
pub mod rules;

pub use crate::cleanup::cleanup;
pub use crate::error::RuleError;
pub use crate::inspect::{inspect, Residual};
pub use crate::normalize::normalize;
pub use crate::reorder::{resolve_pre_posed, resolve_reph};
pub use crate::rules::{Rule, RuleTable};

/// Runs the transcoding pipeline with a particular rule table.
#[derive(Copy, Clone, Debug)]
pub struct Transcoder<'a> {
    table: RuleTable<'a>,
}

impl<'a> Transcoder<'a> {
    pub fn new(table: RuleTable<'a>) -> Self {
        Transcoder { table }
    }

    /// The rule table used for substitution.
    pub fn table(&self) -> RuleTable<'a> {
        self.table
    }

    /// Transcode `text` to Unicode.
    ///
    /// This never fails. Characters that no rule matches are passed through unchanged.
    pub fn transcode(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = normalize(text);
        let text = self.table.substitute(&text);

        let mut cs: Vec<char> = text.chars().collect();
        resolve_pre_posed(&mut cs);
        resolve_reph(&mut cs);
        cleanup(&mut cs);
        cs.into_iter().collect()
    }

    /// Transcode raw bytes, decoding them with [`legacy::decode`] first.
    pub fn transcode_bytes(&self, bytes: &[u8]) -> String {
        self.transcode(&legacy::decode(bytes))
    }
}

impl Default for Transcoder<'static> {
    fn default() -> Self {
        Transcoder::new(RuleTable::krutidev())
    }
}

/// Transcode Kruti Dev `text` to Unicode Devanagari using the built-in rule table.
pub fn transcode(text: &str) -> String {
    Transcoder::default().transcode(text)
}

/// Transcode Kruti Dev text supplied as UTF-8 or Windows-1252 bytes.
pub fn transcode_bytes(bytes: &[u8]) -> String {
    Transcoder::default().transcode_bytes(bytes)
}
