//! CLI command implementations

pub mod approve;
pub mod handle;
pub mod render;
pub mod status;

use std::path::Path;

use serde::Serialize;
use tokio::io::AsyncReadExt;

use crate::config::load_config;
use crate::errors::{Result, SignoffError};
use crate::fs;
use crate::schemas::Config;

/// Resolve the config for a command run
pub(crate) fn resolve_config(cwd: Option<&Path>, config_path: Option<&Path>) -> Result<Config> {
    load_config(&fs::resolve_cwd(cwd), config_path)
}

/// Read a command's input from a file, or stdin when no path is given.
///
/// Returns the text and a name for it to use in error messages.
pub(crate) async fn read_input(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SignoffError::FileNotFound(format!("File not found: {}", path.display()))
                } else {
                    SignoffError::Io(e)
                }
            })?;
            Ok((content, path.display().to_string()))
        }
        None => {
            let mut content = String::new();
            tokio::io::stdin().read_to_string(&mut content).await?;
            Ok((content, "stdin".to_string()))
        }
    }
}

/// Write a result as pretty JSON to `output`, or stdout when none is given
pub(crate) fn emit<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write_json(path, value),
        None => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| SignoffError::InvalidJson(e.to_string()))?;
            println!("{}", json);
            Ok(())
        }
    }
}
