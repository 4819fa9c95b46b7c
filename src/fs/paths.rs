//! Path resolution utilities for signoff
//!
//! Locates the project directory holding `.signoff/` and builds paths to
//! the files inside it.

use std::path::{Path, PathBuf};

/// Find the nearest ancestor of `start_cwd` (inclusive) containing a
/// `.signoff` directory.
///
/// Returns `None` when no ancestor has one; callers then run with defaults.
pub fn find_project_root(start_cwd: &Path) -> Option<PathBuf> {
    let mut current = start_cwd.canonicalize().ok()?;

    loop {
        if get_signoff_dir(&current).is_dir() {
            return Some(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .signoff directory.
pub fn get_signoff_dir(root: &Path) -> PathBuf {
    root.join(".signoff")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_signoff_dir(root).join("config.json")
}
