//! Post-hoc quality checks on transcoded text.
//!
//! Transcoding never fails, but some input leaves traces in the output: a pre-posed sign with
//! nothing after it, or a glyph code no rule knows how to read. Callers that monitor output
//! quality can use `inspect` to find them.

use crate::reorder::PRE_POSED_I;
use crate::rules::KRUTIDEV_RULES;

use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

/// Glyph codes that are resolved outside the rule table.
const RESOLVED_GLYPHS: &[char] = &[
    '\u{00B1}', '\u{00C6}', '\u{00C7}', '\u{00AF}', '\u{00C9}', '\u{00CA}',
];

lazy_static! {
    /// Non-ASCII characters the legacy font uses as glyph codes that never appear in
    /// transcoded output unless they were left unresolved.
    static ref LEGACY_GLYPHS: FxHashSet<char> = {
        let produced: FxHashSet<char> = KRUTIDEV_RULES
            .iter()
            .flat_map(|rule| rule.replacement.chars())
            .collect();
        KRUTIDEV_RULES
            .iter()
            .flat_map(|rule| rule.pattern.chars())
            .chain(RESOLVED_GLYPHS.iter().copied())
            .filter(|ch| !ch.is_ascii() && !produced.contains(ch))
            .collect()
    };
}

/// A trace of input that could not be transcoded cleanly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Residual {
    /// A pre-posed vowel sign that had no character to follow. When it came with an anusvara,
    /// the legacy `a` after it is not reported separately.
    PrePosedSign { index: usize },
    /// A legacy glyph code that survived transcoding.
    LegacyGlyph { index: usize, ch: char },
}

/// Find residual legacy codes in transcoded `text`. Indices are in `char`s.
pub fn inspect(text: &str) -> Vec<Residual> {
    text.chars()
        .enumerate()
        .filter_map(|(index, ch)| {
            if ch == PRE_POSED_I {
                Some(Residual::PrePosedSign { index })
            } else if LEGACY_GLYPHS.contains(&ch) {
                Some(Residual::LegacyGlyph { index, ch })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        assert_eq!(Vec::<Residual>::new(), inspect("\u{0915}\u{093F} \u{2018}1\u{2019}"));
    }

    #[test]
    fn test_pre_posed_sign() {
        assert_eq!(
            vec![Residual::PrePosedSign { index: 1 }],
            inspect("\u{0915}f")
        );
    }

    #[test]
    fn test_legacy_glyph() {
        assert_eq!(
            vec![Residual::LegacyGlyph {
                index: 2,
                ch: '\u{00EE}'
            }],
            inspect("\u{0915} \u{00EE}")
        );
    }

    #[test]
    fn test_produced_punctuation_not_reported() {
        // “ and ” are both glyph codes and the output of Þ and ß
        assert_eq!(Vec::<Residual>::new(), inspect("\u{201C}\u{201D}"));
    }

    #[test]
    fn test_legacy_glyph_set() {
        assert!(LEGACY_GLYPHS.contains(&'\u{00AA}'));
        assert!(LEGACY_GLYPHS.contains(&'\u{00C7}'));
        assert!(!LEGACY_GLYPHS.contains(&'\u{0915}'));
        assert!(!LEGACY_GLYPHS.contains(&'\u{2018}'));
    }
}
