//! Parse message attachments back into a workflow
//!
//! Attachments carry no type tag; each one is classified by which keys it
//! carries: title and text → description, title only → transition marker,
//! anything else → approval belonging to the last marker seen. An empty
//! string still counts as present.

use tracing::{debug, warn};

use crate::domain::{Approval, Transition, Workflow};
use crate::errors::{Result, SignoffError};
use crate::schemas::{Attachment, Config, Field, OrphanPolicy};

/// The role an attachment plays in a rendered workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    Description {
        title: &'a str,
        text: &'a str,
        fields: &'a [Field],
    },
    TransitionMarker {
        title: &'a str,
    },
    Approval(&'a Attachment),
}

impl<'a> Record<'a> {
    /// Classify an attachment by the keys it carries
    pub fn classify(attachment: &'a Attachment) -> Self {
        match (attachment.title.as_deref(), attachment.text.as_deref()) {
            (Some(title), Some(text)) => Record::Description {
                title,
                text,
                fields: attachment.fields.as_deref().unwrap_or_default(),
            },
            (Some(title), None) => Record::TransitionMarker { title },
            _ => Record::Approval(attachment),
        }
    }
}

/// Strip the mention decoration `<@` ... `>` from a field value
pub fn decode_mention(value: &str) -> String {
    let mut user: String = value.chars().skip(2).collect();
    user.pop();
    user
}

/// Rebuild one approval from its attachment
fn decode_approval(attachment: &Attachment, config: &Config) -> Approval {
    let key = attachment.callback_id.clone().unwrap_or_default();
    if key.is_empty() {
        warn!("approval attachment has no callback_id");
    }

    let mut approval = Approval::new(key, attachment.text.clone().unwrap_or_default());
    for field in attachment.field_iter() {
        if field.title == config.labels.approval_required {
            let approvers = field.value.split(',').map(str::to_string).collect();
            approval = approval.with_approvers(Some(approvers));
        }
        if field.title == config.labels.approved_by {
            let key = approval.approve_key.clone();
            approval.approve(&key, decode_mention(&field.value));
        }
    }
    approval
}

/// Rebuild a workflow from the attachments it was rendered into.
///
/// # Errors
/// * `MissingAttachments` - If there are no attachments
/// * `OrphanApproval` - If an approval precedes every transition marker and
///   the orphan policy is `fail`
pub fn parse(attachments: &[Attachment], config: &Config) -> Result<Workflow> {
    if attachments.is_empty() {
        return Err(SignoffError::MissingAttachments);
    }

    let mut title = String::new();
    let mut description = String::new();
    let mut fields: Vec<Field> = Vec::new();
    let mut stages: Vec<(String, Vec<Approval>)> = Vec::new();

    for attachment in attachments {
        match Record::classify(attachment) {
            Record::Description {
                title: t,
                text,
                fields: f,
            } => {
                debug!(title = t, "description record");
                title = t.to_string();
                description = text.to_string();
                fields.extend_from_slice(f);
            }
            Record::TransitionMarker { title } => {
                debug!(title, "transition marker");
                stages.push((title.to_string(), Vec::new()));
            }
            Record::Approval(at) => {
                let approval = decode_approval(at, config);
                match (stages.last_mut(), config.orphan_policy) {
                    (Some((_, approvals)), _) => approvals.push(approval),
                    (None, OrphanPolicy::Skip) => {
                        warn!(approve_key = %approval.approve_key, "skipping approval before any transition");
                    }
                    (None, OrphanPolicy::Fail) => {
                        return Err(SignoffError::OrphanApproval {
                            approve_key: approval.approve_key,
                        });
                    }
                }
            }
        }
    }

    let transitions = stages
        .into_iter()
        .map(|(title, approvals)| Transition::new(title, approvals))
        .collect();

    Ok(Workflow::new(title, description, fields, transitions))
}
