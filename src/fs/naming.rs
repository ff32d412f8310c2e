//! Filename generation and manipulation.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Replace characters that are not allowed in a single path component.
///
/// Catalog names are free text, so separators and reserved characters are
/// replaced rather than rejected.
pub fn sanitize_component(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Validate a complete filename stem.
///
/// Returns an error for empty names and names made only of dots.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let sanitized = sanitize_component(name);

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    if sanitized.chars().all(|c| c == '.') {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    Ok(sanitized)
}

/// Generate a unique filename by appending a number if the file exists.
pub fn make_unique_filename(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parent = path.parent().unwrap_or(Path::new("."));

    let mut counter = 1;
    loop {
        let new_name = if ext.is_empty() {
            format!("{}_{}", stem, counter)
        } else {
            format!("{}_{}.{}", stem, counter, ext)
        };

        let new_path = parent.join(&new_name);
        if !new_path.exists() {
            return new_path;
        }

        counter += 1;
        if counter > 1000 {
            return new_path;
        }
    }
}
