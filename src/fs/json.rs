//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SignoffError};
use crate::schemas::{Attachment, Config, Message};

/// Deserialize JSON text, naming `source` in the error.
///
/// # Arguments
/// * `content` - The JSON text
/// * `source` - Where the text came from, for error messages
///
/// # Returns
/// The deserialized value
///
/// # Errors
/// * `InvalidJson` - If the text is not valid JSON for `T`
pub fn parse_json<T: DeserializeOwned>(content: &str, source: &str) -> Result<T> {
    serde_json::from_str(content)
        .map_err(|e| SignoffError::InvalidJson(format!("Invalid JSON in {}: {}", source, e)))
}

/// Read and deserialize a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// The deserialized value
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SignoffError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            SignoffError::Io(e)
        }
    })?;

    parse_json(&content, &path.display().to_string())
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
///
/// # Arguments
/// * `path` - Path to the JSON file
/// * `data` - The value to serialize and write
///
/// # Errors
/// * `Io` - If there's an error writing the file
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| SignoffError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read a config file, or the default config if it doesn't exist.
///
/// # Arguments
/// * `path` - Path to the config file
///
/// # Returns
/// The parsed config, with defaults for any missing keys
///
/// # Errors
/// * `ConfigError` - If the file exists but is not a valid config
pub fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(path).map_err(|e| match e {
        SignoffError::InvalidJson(msg) => SignoffError::ConfigError(msg),
        other => other,
    })
}

/// Accepted shapes for attachment input
#[derive(Deserialize)]
#[serde(untagged)]
enum AttachmentSource {
    List(Vec<Attachment>),
    Message(Message),
}

/// Extract attachments from either a bare JSON array or a message object.
///
/// # Arguments
/// * `content` - The JSON text
/// * `source` - Where the text came from, for error messages
///
/// # Returns
/// The attachments in message order
///
/// # Errors
/// * `InvalidJson` - If the text is neither shape
/// * `MissingAttachments` - If a message object has no `attachments` key
pub fn parse_attachments(content: &str, source: &str) -> Result<Vec<Attachment>> {
    match parse_json::<AttachmentSource>(content, source)? {
        AttachmentSource::List(list) => Ok(list),
        AttachmentSource::Message(message) => {
            message.attachments.ok_or(SignoffError::MissingAttachments)
        }
    }
}
