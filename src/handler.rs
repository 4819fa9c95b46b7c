//! Invocation handling: parse the message, apply the action, re-render
//!
//! Nothing is cached between calls. Each call decodes the workflow from the
//! attachments it is handed, so a message edited elsewhere is always seen
//! as it is now.

use tracing::{info, info_span};

use crate::codec::{parse, render};
use crate::domain::ApproveOutcome;
use crate::errors::{Result, SignoffError};
use crate::schemas::{Attachment, Config, Invocation, Message};

/// An approve button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalAction {
    pub approve_key: String,
    pub actor_id: String,
}

/// Attachments to post in place of the originals, and what the action did
#[derive(Debug, Clone, PartialEq)]
pub struct HandledAction {
    pub attachments: Vec<Attachment>,
    pub outcome: ApproveOutcome,
    pub finished: bool,
}

/// Run one decode → approve → encode cycle over a message's attachments.
///
/// With no action the workflow is only re-rendered.
///
/// # Errors
/// * `MissingAttachments` - If `attachments` is empty
/// * `OrphanApproval` - If the attachments are malformed (see [`parse`])
pub fn handle_action(
    attachments: &[Attachment],
    action: Option<&ApprovalAction>,
    config: &Config,
) -> Result<HandledAction> {
    let mut workflow = parse(attachments, config)?;

    let outcome = match action {
        Some(action) => {
            let _span = info_span!("approve", key = %action.approve_key, actor = %action.actor_id).entered();
            let outcome = workflow.approve(&action.approve_key, &action.actor_id);
            info!(?outcome, progress = workflow.progress(), goal = workflow.goal(), "action applied");
            outcome
        }
        None => ApproveOutcome::Ignored,
    };

    Ok(HandledAction {
        attachments: render(&workflow, config),
        outcome,
        finished: workflow.is_finished(),
    })
}

/// Handle an interactive message payload and return the updated message.
///
/// The first action is applied only when it is an approve press; every
/// other message key is carried over unchanged.
///
/// # Errors
/// * `MissingAttachments` - If the original message has no attachments
pub fn handle_invocation(invocation: Invocation, config: &Config) -> Result<Message> {
    let action = invocation.approve_key().map(|key| ApprovalAction {
        approve_key: key.to_string(),
        actor_id: invocation.user.id.clone(),
    });

    let mut message = invocation.original_message;
    let attachments = message
        .attachments
        .take()
        .ok_or(SignoffError::MissingAttachments)?;

    let handled = handle_action(&attachments, action.as_ref(), config)?;
    message.attachments = Some(handled.attachments);
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Approval, Transition, Workflow};

    fn release_attachments(config: &Config) -> Vec<Attachment> {
        let wf = Workflow::new(
            "Release",
            "Ship 1.4",
            vec![],
            vec![
                Transition::new(
                    "Review",
                    vec![Approval::new("a", "QA").with_approvers(Some(vec!["alice".to_string()]))],
                ),
                Transition::new("Deploy", vec![Approval::new("b", "Ops")]),
            ],
        );
        render(&wf, config)
    }

    fn press(key: &str, actor: &str) -> ApprovalAction {
        ApprovalAction {
            approve_key: key.to_string(),
            actor_id: actor.to_string(),
        }
    }

    #[test]
    fn test_handle_action_sequence() {
        let config = Config::default();
        let mut attachments = release_attachments(&config);

        let handled = handle_action(&attachments, Some(&press("b", "carol")), &config).unwrap();
        assert_eq!(handled.outcome, ApproveOutcome::Ignored);
        assert_eq!(handled.attachments, attachments);
        attachments = handled.attachments;

        let handled = handle_action(&attachments, Some(&press("a", "alice")), &config).unwrap();
        assert_eq!(handled.outcome, ApproveOutcome::Advanced { progress: 1 });
        assert!(!handled.finished);
        attachments = handled.attachments;

        let handled = handle_action(&attachments, Some(&press("b", "dave")), &config).unwrap();
        assert_eq!(handled.outcome, ApproveOutcome::Advanced { progress: 2 });
        assert!(handled.finished);
        assert!(handled.attachments[1..].iter().all(|a| a.color == "#00ff00" && !a.has_actions()));
    }

    #[test]
    fn test_handle_action_without_action_rerenders() {
        let config = Config::default();
        let attachments = release_attachments(&config);

        let handled = handle_action(&attachments, None, &config).unwrap();
        assert_eq!(handled.attachments, attachments);
        assert_eq!(handled.outcome, ApproveOutcome::Ignored);
    }

    #[test]
    fn test_handle_action_empty_fails() {
        let err = handle_action(&[], Some(&press("a", "alice")), &Config::default()).unwrap_err();
        assert!(matches!(err, SignoffError::MissingAttachments));
    }

    fn invocation(value: &str, attachments: Option<Vec<Attachment>>) -> Invocation {
        let mut json = serde_json::json!({
            "type": "interactive_message",
            "actions": [{"name": "a", "value": value, "type": "button"}],
            "user": {"id": "alice"},
            "original_message": {"text": "Release train", "ts": "1458170866.000004"}
        });
        if let Some(attachments) = attachments {
            json["original_message"]["attachments"] = serde_json::to_value(attachments).unwrap();
        }
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_handle_invocation_approves() {
        let config = Config::default();
        let inv = invocation("approve", Some(release_attachments(&config)));

        let message = handle_invocation(inv, &config).unwrap();
        assert_eq!(message.text.as_deref(), Some("Release train"));
        assert_eq!(message.extra["ts"], "1458170866.000004");

        let wf = parse(message.attachments.as_ref().unwrap(), &config).unwrap();
        assert_eq!(wf.progress(), 1);
        assert_eq!(wf.transitions()[0].approvals()[0].approved_by(), Some("alice"));
    }

    #[test]
    fn test_handle_invocation_ignores_other_actions() {
        let config = Config::default();
        let original = release_attachments(&config);
        let inv = invocation("recommend", Some(original.clone()));

        let message = handle_invocation(inv, &config).unwrap();
        assert_eq!(message.attachments, Some(original));
    }

    #[test]
    fn test_handle_invocation_without_attachments() {
        let err = handle_invocation(invocation("approve", None), &Config::default()).unwrap_err();
        assert!(matches!(err, SignoffError::MissingAttachments));
    }
}
