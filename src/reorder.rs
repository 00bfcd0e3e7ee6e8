//! Moving signs that the legacy font stores in visual order into logical order.
//!
//! Kruti Dev stores the short i sign before the consonant it follows in speech, since that is
//! where it is drawn, and stores the reph after the syllable it sits on top of. Unicode wants
//! both in logical order: the i sign after its consonant and the reph (ra + virama) before the
//! base consonant of the syllable.

use crate::buffer::replace_all;
use crate::devanagari::{is_combining_mark, ANUSVARA, RA, SIGN_I, SIGN_II, VIRAMA};

use log::debug;

/// Legacy code for the short i sign, drawn before its consonant.
pub const PRE_POSED_I: char = 'f';
/// Legacy code for the reph.
pub const REPH: char = 'Z';
/// Legacy code for the anusvara. Only survives substitution when paired with `PRE_POSED_I`.
const LEGACY_ANUSVARA: char = 'a';

/// Move pre-posed vowel signs after the character they precede.
///
/// A sign at the very end of the buffer, or directly before a line break, has nothing to
/// attach to and is left in place. For `Ç`, `¯` and `É` that leaves the Latin pair `fa`, with
/// the anusvara still in its legacy form.
pub fn resolve_pre_posed(cs: &mut Vec<char>) {
    // ±
    replace_all(cs, &['\u{00B1}'], &[REPH, ANUSVARA]);
    // Æ
    replace_all(cs, &['\u{00C6}'], &[RA, VIRAMA, PRE_POSED_I]);

    reorder_pre_posed(cs, &[PRE_POSED_I], &[], &[SIGN_I]);

    // Ç, ¯
    replace_all(cs, &['\u{00C7}'], &[PRE_POSED_I, LEGACY_ANUSVARA]);
    replace_all(cs, &['\u{00AF}'], &[PRE_POSED_I, LEGACY_ANUSVARA]);
    // É
    replace_all(
        cs,
        &['\u{00C9}'],
        &[RA, VIRAMA, PRE_POSED_I, LEGACY_ANUSVARA],
    );

    reorder_pre_posed(
        cs,
        &[PRE_POSED_I, LEGACY_ANUSVARA],
        &[],
        &[SIGN_I, ANUSVARA],
    );

    // Ê
    replace_all(cs, &['\u{00CA}'], &[SIGN_II, REPH]);

    // An i sign placed before a half form belongs after the consonant that completes the
    // conjunct.
    reorder_pre_posed(cs, &[SIGN_I, VIRAMA], &[VIRAMA], &[SIGN_I]);
}

/// Rewrite every `marker, ch` as `lead, ch, sign` until no marker with a following character
/// is left.
///
/// Resolved text builds up in `out`. Characters produced by a rewrite are fed through again
/// before the rest of the input, since they can complete another marker.
fn reorder_pre_posed(cs: &mut Vec<char>, marker: &[char], lead: &[char], sign: &[char]) {
    let mut out: Vec<char> = Vec::with_capacity(cs.len());
    // Stack, so the next character to feed is on top.
    let mut pending: Vec<char> = Vec::new();
    let mut rest = std::mem::take(cs).into_iter();

    while let Some(ch) = pending.pop().or_else(|| rest.next()) {
        if !out.ends_with(marker) {
            out.push(ch);
        } else if is_line_break(ch) {
            debug!("pre-posed sign at {} is followed by a line break", out.len() - marker.len());
            out.push(ch);
        } else {
            out.truncate(out.len() - marker.len());
            pending.extend(sign.iter().rev());
            pending.push(ch);
            pending.extend(lead.iter().rev());
        }
    }
    if out.ends_with(marker) {
        debug!("pre-posed sign at {} has no character to follow", out.len() - marker.len());
    }
    *cs = out;
}

fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

/// Replace each reph marker with ra + virama placed before the base of the syllable it
/// follows.
///
/// The base is the closest preceding character that is not a combining mark. A reph with no
/// such character before it is dropped.
pub fn resolve_reph(cs: &mut Vec<char>) {
    replace_all(cs, &[VIRAMA, REPH], &[REPH]);

    let mut out: Vec<char> = Vec::with_capacity(cs.len() + cs.len() / 2);
    for &ch in cs.iter() {
        if ch != REPH {
            out.push(ch);
            continue;
        }

        // Only the run of marks after the base is shifted by the insert.
        let mut base = out.len();
        while base > 0 && is_combining_mark(out[base - 1]) {
            base -= 1;
        }
        if base == 0 {
            debug!("dropping reph at {} with no base consonant", out.len());
            continue;
        }

        let base = base - 1;
        out.splice(base..base, [RA, VIRAMA]);
    }
    *cs = out;
}
