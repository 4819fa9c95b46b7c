//! Approve command - Apply one button press to rendered attachments

use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::fs;
use crate::handler::{handle_action, ApprovalAction};

use super::{emit, read_input, resolve_config};

/// Parse the attachments, approve `key` as `by`, and emit the re-rendered attachments
pub async fn run(
    cwd: Option<&Path>,
    config_path: Option<&Path>,
    key: &str,
    by: &str,
    attachments: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let config = resolve_config(cwd, config_path)?;
    let (content, source) = read_input(attachments).await?;
    let attachments = fs::parse_attachments(&content, &source)?;

    let action = ApprovalAction {
        approve_key: key.to_string(),
        actor_id: by.to_string(),
    };
    let handled = handle_action(&attachments, Some(&action), &config)?;
    if !handled.outcome.changed() {
        info!(key, "approval had no effect");
    }

    emit(&handled.attachments, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::schemas::{Attachment, Config};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_approve_attachments_file() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("message.json");
        let output = temp.path().join("updated.json");
        std::fs::write(
            &input,
            r##"{"text": "Release", "attachments": [
                {"title": "Release", "text": "Ship", "color": "#000000"},
                {"title": "Review", "color": "#ff0000"},
                {"text": "QA", "callback_id": "qa", "color": "#ff0000"}
            ]}"##,
        )
        .unwrap();

        run(Some(temp.path()), None, "qa", "U1", Some(&input), Some(&output)).await.unwrap();

        let attachments: Vec<Attachment> = fs::read_json(&output).unwrap();
        let wf = codec::parse(&attachments, &Config::default()).unwrap();
        assert!(wf.is_finished());
        assert_eq!(wf.transitions()[0].approvals()[0].approved_by(), Some("U1"));
    }
}
