/// Shared helpers for vireo integration tests.
use std::fs;
use std::path::{Path, PathBuf};

/// Write `lines` to `dir/name` with a trailing newline, returning the path.
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(&path, contents).expect("failed to write test file");
    path
}

/// Read `path` into a vector of lines.
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("failed to read test file")
        .lines()
        .map(str::to_string)
        .collect()
}

/// The standard geography vocabulary header line.
#[allow(dead_code)]
pub fn geog_header_line() -> String {
    format!("{},standard,checked", vireo::dwc::geog_key())
}
