//! Sample directory files.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Three records, one without a bio.
pub const SMALL_DIRECTORY_JSON: &str = r#"[
  {"name": "Ada Lovelace", "pictureUrl": "https://example.test/ada.jpg", "bio": "first programmer | loves engines"},
  {"name": "Grace Hopper", "pictureUrl": "https://example.test/grace.jpg", "bio": "found the bug | COBOL"},
  {"name": "Alan Turing", "pictureUrl": "https://example.test/alan.jpg", "bio": null}
]"#;

/// A file whose second record has a blank name.
pub const INVALID_DIRECTORY_JSON: &str = r#"[
  {"name": "Ada Lovelace", "pictureUrl": "https://example.test/ada.jpg"},
  {"name": "  ", "pictureUrl": "https://example.test/blank.jpg"}
]"#;

/// Write `content` to `dir/file_name` and return the path.
pub fn write_directory_file(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, content)?;
    Ok(path)
}
