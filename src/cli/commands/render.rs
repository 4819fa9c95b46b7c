//! Render command - Turn a workflow definition into attachments

use std::path::Path;

use tracing::info;

use crate::codec;
use crate::domain::Workflow;
use crate::errors::Result;
use crate::fs;
use crate::schemas::WorkflowDefinition;

use super::{emit, read_input, resolve_config};

/// Render a workflow definition into message attachments
pub async fn run(
    cwd: Option<&Path>,
    config_path: Option<&Path>,
    definition: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let config = resolve_config(cwd, config_path)?;
    let (content, source) = read_input(definition).await?;
    let definition: WorkflowDefinition = fs::parse_json(&content, &source)?;

    let workflow = Workflow::from(definition);
    info!(title = workflow.title(), goal = workflow.goal(), "rendering workflow");

    emit(&codec::render(&workflow, &config), output)
}
