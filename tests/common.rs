use std::path::{Path, PathBuf};

pub fn fixture_path<P: AsRef<Path>>(path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}

/// Read a test fixture from a path relative to CARGO_MANIFEST_DIR
pub fn read_fixture<P: AsRef<Path>>(path: P) -> String {
    std::fs::read_to_string(fixture_path(path)).expect("error reading file contents")
}

/// Read a fixture of tab separated `input, expected` pairs. Lines starting with `#` are
/// comments.
pub fn read_pairs<P: AsRef<Path>>(path: P) -> Vec<(String, String)> {
    read_fixture(path)
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (input, expected) = line.split_once('\t').expect("missing tab");
            (input.to_owned(), expected.to_owned())
        })
        .collect()
}
