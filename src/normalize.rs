//! Corrections applied to the raw legacy text before any substitution.
//!
//! Text extracted from documents set in Kruti Dev picks up a few predictable corruptions. A
//! space can end up between a conjunct-forming mark and the glyph it joins, and the en and em
//! dash glyphs (which the font uses for `दृ` and `कृ`) are often real dashes that stand in for
//! the font's own dash code `&`.

/// The legacy code for a plain dash.
pub const DASH: char = '&';

/// Marks that must stay attached to the preceding glyph.
const JOINING_MARKS: &[&str] = &["\u{00AA}", "~j", "z"];

/// Fix known corruptions in raw Kruti Dev text.
pub fn normalize(text: &str) -> String {
    let mut text = text.to_owned();
    for mark in JOINING_MARKS {
        let spaced = format!(" {}", mark);
        if text.contains(&spaced) {
            text = text.replace(&spaced, *mark);
        }
    }

    let mut cs: Vec<char> = text.chars().collect();
    reclassify_dashes(&mut cs);
    cs.into_iter().collect()
}

/// An en or em dash followed by anything other than a consonant or vowel sign is a dash,
/// not a ligature. A dash in final position is left alone.
fn reclassify_dashes(cs: &mut [char]) {
    for i in 0..cs.len().saturating_sub(1) {
        if is_ambiguous_dash(cs[i]) && !starts_syllable_part(cs[i + 1]) {
            cs[i] = DASH;
        }
    }
}

fn is_ambiguous_dash(ch: char) -> bool {
    matches!(ch, '\u{2013}' | '\u{2014}')
}

/// Single glyph codes for full consonants and dependent vowel signs.
///
/// Consonants written as a half form plus `k` (e.g. `[k`) are not included, their first code
/// is the half form.
#[rustfmt::skip]
fn starts_syllable_part(ch: char) -> bool {
    match ch {
        // Consonants
        'd' | 'x' | '\u{00B3}' | 'p' | 'N' | 't' | '>' | '\u{00A5}' | 'V' | 'B' | 'M' | '<'
        | 'r' | 'n' | 'u' | 'i' | 'Q' | 'c' | 'e' | ';' | 'j' | 'y' | 'G' | 'o' | 'l'
        | 'g' => true,
        // Vowel signs
        'k' | 'f' | 'h' | 'q' | 'w' | '`' | 's' | 'S' | 'a' | '%' | '\u{00A1}' | 'W' => true,
        _ => false,
    }
}
