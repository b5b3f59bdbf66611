//! Helpers for turning CLI arguments into reconciler inputs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the songs directory: the given path made absolute, or the
/// directory holding the running executable.
pub fn resolve_songs_dir(arg: Option<&Path>) -> Result<PathBuf> {
    match arg {
        Some(path) => std::path::absolute(path).context("invalid path to songs directory"),
        None => {
            let exe = std::env::current_exe().context("can't find path to executable")?;
            exe.parent()
                .map(Path::to_path_buf)
                .context("can't find directory containing executable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path_is_absolute() {
        let resolved = resolve_songs_dir(Some(Path::new("CustomSongs"))).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("CustomSongs"));
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let dir = std::env::temp_dir();
        assert_eq!(resolve_songs_dir(Some(&dir)).unwrap(), dir);
    }

    #[test]
    fn test_resolve_default_is_executable_dir() {
        let resolved = resolve_songs_dir(None).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(resolved.as_path()), exe.parent());
    }
}
