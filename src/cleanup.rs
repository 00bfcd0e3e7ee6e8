//! Removing illegal mark sequences left behind by substitution and reordering.

use crate::devanagari::{is_combining_mark, RA, VIRAMA};

/// Remove separators and viramas that end up in front of a combining mark, and collapse
/// redundant viramas.
///
/// Running this twice gives the same result as running it once.
pub fn cleanup(cs: &mut Vec<char>) {
    attach_marks(cs);
    collapse_viramas(cs);
}

/// A combining mark must directly follow the character it modifies. Spaces and viramas in
/// front of a mark are dropped, commas are moved after it.
fn attach_marks(cs: &mut Vec<char>) {
    let mut out = Vec::with_capacity(cs.len());
    for &ch in cs.iter() {
        if !is_combining_mark(ch) {
            out.push(ch);
            continue;
        }

        let mut commas = 0;
        while let Some(&prev) = out.last() {
            match prev {
                ',' => commas += 1,
                ' ' | VIRAMA => {}
                _ => break,
            }
            out.pop();
        }
        out.push(ch);
        out.extend(std::iter::repeat(',').take(commas));
    }
    *cs = out;
}

/// Collapse doubled viramas, turn virama + ra + virama into ra + virama, and drop a virama
/// before a space.
fn collapse_viramas(cs: &mut Vec<char>) {
    let mut out: Vec<char> = Vec::with_capacity(cs.len());
    for &ch in cs.iter() {
        match ch {
            VIRAMA => {
                if out.last() == Some(&VIRAMA) {
                    continue;
                }
                if out.ends_with(&[VIRAMA, RA]) {
                    let len = out.len();
                    out.remove(len - 2);
                }
                out.push(ch);
            }
            ' ' => {
                while out.last() == Some(&VIRAMA) {
                    out.pop();
                }
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    *cs = out;
}
