//! File system utilities for signoff
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{parse_attachments, parse_json, read_config, read_json, write_json};
pub use paths::{find_project_root, get_config_path, get_signoff_dir, resolve_cwd};
