//! Devanagari code points and character classes used by the resolvers.

pub const RA: char = '\u{0930}';
pub const VIRAMA: char = '\u{094D}';
pub const SIGN_I: char = '\u{093F}';
pub const SIGN_II: char = '\u{0940}';
pub const ANUSVARA: char = '\u{0902}';

/// Returns `true` for the dependent vowel signs and modifiers that never stand on their own
/// and must follow a consonant.
pub fn is_combining_mark(ch: char) -> bool {
    match ch {
        // Aa, I, Ii, U, Uu, Vocalic R
        '\u{093E}'..='\u{0943}' => true,
        // E, Ai
        '\u{0947}' | '\u{0948}' => true,
        // O, Au
        '\u{094B}' | '\u{094C}' => true,
        // Candrabindu, Anusvara, Visarga
        '\u{0901}'..='\u{0903}' => true,
        // Candra E
        '\u{0945}' => true,
        _ => false,
    }
}
