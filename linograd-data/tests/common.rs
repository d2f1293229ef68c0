use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `contents` to `name` inside a fresh temporary directory. The
/// directory lives as long as the returned guard.
#[allow(dead_code)]
pub(crate) fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (dir, path)
}
