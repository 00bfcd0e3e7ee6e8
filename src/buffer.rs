//! Helpers for editing a `Vec<char>` working buffer in place.

/// Replace all non-overlapping occurrences of `pattern`, scanning left to right.
pub(crate) fn replace_all(cs: &mut Vec<char>, pattern: &[char], replacement: &[char]) {
    if pattern.is_empty() || cs.len() < pattern.len() {
        return;
    }

    let mut out = Vec::with_capacity(cs.len());
    let mut i = 0;
    while i < cs.len() {
        if cs[i..].starts_with(pattern) {
            out.extend_from_slice(replacement);
            i += pattern.len();
        } else {
            out.push(cs[i]);
            i += 1;
        }
    }
    *cs = out;
}
