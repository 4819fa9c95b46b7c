//! Configuration loading with defaults

use std::path::Path;

use tracing::debug;

use crate::errors::{Result, SignoffError};
use crate::fs;
use crate::schemas::Config;

/// Load configuration, falling back to defaults.
///
/// An explicit `override_path` wins and must exist. Otherwise the nearest
/// `.signoff/config.json` above `cwd` is used if there is one.
///
/// # Errors
/// * `FileNotFound` - If `override_path` does not exist
/// * `ConfigError` - If the chosen file is not a valid config
pub fn load_config(cwd: &Path, override_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = override_path {
        debug!(path = %path.display(), "loading config override");
        if !path.exists() {
            return Err(SignoffError::FileNotFound(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return fs::read_config(path);
    }

    match fs::find_project_root(cwd) {
        Some(root) => {
            let path = fs::get_config_path(&root);
            debug!(path = %path.display(), "loading project config");
            fs::read_config(&path)
        }
        None => Ok(Config::default()),
    }
}
