//! Status command - Show where a rendered workflow stands

use std::path::Path;

use crate::codec;
use crate::domain::WorkflowStatus;
use crate::errors::Result;
use crate::fs;

use super::{emit, read_input, resolve_config};

/// Human-readable status lines
pub fn format_status(status: &WorkflowStatus) -> String {
    let mut out = format!("{} [{}/{}]", status.title, status.progress, status.goal);
    match &status.current {
        Some(stage) if !status.pending.is_empty() => {
            out.push_str(&format!("\n  current: {}\n  waiting on: {}", stage, status.pending.join(", ")));
        }
        Some(stage) => out.push_str(&format!("\n  current: {}", stage)),
        None => out.push_str("\n  finished"),
    }
    out
}

/// Print the status of the workflow stored in the given attachments
pub async fn run(
    cwd: Option<&Path>,
    config_path: Option<&Path>,
    attachments: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = resolve_config(cwd, config_path)?;
    let (content, source) = read_input(attachments).await?;
    let workflow = codec::parse(&fs::parse_attachments(&content, &source)?, &config)?;

    let status = workflow.status();
    if json {
        emit(&status, None)
    } else {
        println!("{}", format_status(&status));
        Ok(())
    }
}
