//! Output path management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::{make_unique_filename, sanitize_filename};

/// Path the recording of `stem` is written to.
///
/// Never points at an existing file: a numeric suffix is added instead.
pub fn get_output_path(config: &Config, stem: &str) -> Result<PathBuf> {
    let stem = sanitize_filename(stem)?;
    let extension = config.playback.extension.trim_start_matches('.');
    let path = config
        .output_directory()
        .join(format!("{}.{}", stem, extension));

    Ok(make_unique_filename(&path))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.playback.output_directory = Some(dir.path().to_path_buf());

        let path = get_output_path(&config, "Football_Final_99").unwrap();
        assert_eq!(path, dir.path().join("Football_Final_99.ts"));

        config.playback.extension = ".mp4".into();
        let path = get_output_path(&config, "Football_Final_99").unwrap();
        assert_eq!(path, dir.path().join("Football_Final_99.mp4"));
    }

    #[test]
    fn test_get_output_path_rejects_empty_stem() {
        assert!(get_output_path(&Config::default(), " ").is_err());
    }

    #[test]
    fn test_ensure_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
