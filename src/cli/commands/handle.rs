//! Handle command - Process an interactive message payload

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::handler::handle_invocation;
use crate::schemas::Invocation;

use super::{emit, read_input, resolve_config};

/// Apply the payload's action and emit the updated message
pub async fn run(
    cwd: Option<&Path>,
    config_path: Option<&Path>,
    payload: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let config = resolve_config(cwd, config_path)?;
    let (content, source) = read_input(payload).await?;
    let invocation: Invocation = fs::parse_json(&content, &source)?;

    let message = handle_invocation(invocation, &config)?;
    emit(&message, output)
}
