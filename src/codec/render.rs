//! Render a workflow into message attachments

use crate::domain::{Approval, Transition, Workflow};
use crate::schemas::{Action, Attachment, Config, Field, APPROVE_ACTION_VALUE};

/// Decorate a user id as a chat mention
pub fn mention(user: &str) -> String {
    format!("<@{}>", user)
}

impl Approval {
    /// Attachment for this approval.
    ///
    /// Approved gates are highlighted and name their approver; pending gates
    /// carry an approve button bound to the key, colored for attention only
    /// when their transition is the active one.
    pub fn to_presentation(&self, active: bool, config: &Config) -> Attachment {
        let mut fields = Vec::new();
        if let Some(approvers) = self.approvers() {
            fields.push(Field::new(&config.labels.approval_required, approvers.join(",")));
        }

        let (color, actions) = match self.approved_by() {
            Some(by) => {
                fields.push(Field::new(&config.labels.approved_by, mention(by)));
                (config.colors.success.clone(), None)
            }
            None => {
                let color = if active {
                    config.colors.attention.clone()
                } else {
                    config.colors.neutral.clone()
                };
                let button = Action {
                    name: self.approve_key.clone(),
                    text: config.labels.approve_button.clone(),
                    kind: "button".to_string(),
                    value: APPROVE_ACTION_VALUE.to_string(),
                    confirm: Some(config.confirm.clone()),
                };
                (color, Some(vec![button]))
            }
        };

        Attachment {
            title: None,
            text: Some(self.description.clone()),
            color,
            fields: (!fields.is_empty()).then_some(fields),
            callback_id: Some(self.approve_key.clone()),
            actions,
        }
    }
}

impl Transition {
    /// Summary attachment for the transition followed by one per approval
    pub fn to_presentation_group(&self, active: bool, config: &Config) -> Vec<Attachment> {
        let color = if self.is_all_approved() {
            &config.colors.success
        } else if active {
            &config.colors.attention
        } else {
            &config.colors.neutral
        };

        let summary = Attachment {
            title: Some(self.title().to_string()),
            color: color.clone(),
            ..Default::default()
        };

        std::iter::once(summary)
            .chain(self.approvals().iter().map(|a| a.to_presentation(active, config)))
            .collect()
    }
}

/// Render the whole workflow: the description attachment, then each
/// transition's group with only the one under the cursor marked active.
pub fn render(workflow: &Workflow, config: &Config) -> Vec<Attachment> {
    let description = Attachment {
        title: Some(workflow.title().to_string()),
        text: Some(workflow.description().to_string()),
        color: config.colors.description.clone(),
        fields: (!workflow.fields().is_empty()).then(|| workflow.fields().to_vec()),
        ..Default::default()
    };

    std::iter::once(description)
        .chain(
            workflow
                .transitions()
                .iter()
                .enumerate()
                .flat_map(|(i, t)| t.to_presentation_group(i == workflow.progress(), config)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_workflow() -> Workflow {
        Workflow::new(
            "Release",
            "Ship 1.4",
            vec![Field::new("Version", "1.4")],
            vec![
                Transition::new(
                    "Review",
                    vec![Approval::new("a", "QA").with_approvers(Some(vec![
                        "alice".to_string(),
                        "bob".to_string(),
                    ]))],
                ),
                Transition::new("Deploy", vec![Approval::new("b", "Ops")]),
            ],
        )
    }

    #[test]
    fn test_render_layout() {
        let config = Config::default();
        let attachments = render(&make_workflow(), &config);

        assert_eq!(attachments.len(), 5);
        assert_eq!(attachments[0].title.as_deref(), Some("Release"));
        assert_eq!(attachments[0].text.as_deref(), Some("Ship 1.4"));
        assert_eq!(attachments[0].color, "#000000");
        assert_eq!(attachments[0].fields.as_ref().unwrap()[0].value, "1.4");

        assert_eq!(attachments[1].title.as_deref(), Some("Review"));
        assert!(attachments[1].text.is_none());
        assert!(!attachments[1].has_actions());
        assert_eq!(attachments[3].title.as_deref(), Some("Deploy"));
    }

    #[test]
    fn test_active_stage_colors() {
        let config = Config::default();
        let attachments = render(&make_workflow(), &config);

        // Active stage and its pending approval draw attention
        assert_eq!(attachments[1].color, "#ff0000");
        assert_eq!(attachments[2].color, "#ff0000");
        // Future stage stays neutral
        assert_eq!(attachments[3].color, "");
        assert_eq!(attachments[4].color, "");
    }

    #[test]
    fn test_pending_approval_presentation() {
        let config = Config::default();
        let attachments = render(&make_workflow(), &config);
        let approval = &attachments[2];

        assert_eq!(approval.text.as_deref(), Some("QA"));
        assert_eq!(approval.callback_id.as_deref(), Some("a"));
        let fields = approval.fields.as_ref().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].title, config.labels.approval_required);
        assert_eq!(fields[0].value, "alice,bob");

        let action = &approval.actions.as_ref().unwrap()[0];
        assert_eq!(action.name, "a");
        assert_eq!(action.value, "approve");
        assert_eq!(action.kind, "button");
        assert_eq!(action.confirm.as_ref(), Some(&config.confirm));

        // No approvers means no fields at all
        assert!(attachments[4].fields.is_none());
    }

    #[test]
    fn test_finished_workflow_is_green_without_controls() {
        let config = Config::default();
        let mut wf = make_workflow();
        wf.approve("a", "alice");
        wf.approve("b", "dave");

        let attachments = render(&wf, &config);
        for at in &attachments[1..] {
            assert_eq!(at.color, "#00ff00");
            assert!(!at.has_actions());
        }

        let approved = attachments[4].fields.as_ref().unwrap();
        assert_eq!(approved[0].title, "✅ Approved by");
        assert_eq!(approved[0].value, "<@dave>");
    }

    #[test]
    fn test_approved_keeps_approvers_field() {
        let config = Config::default();
        let mut wf = make_workflow();
        wf.approve("a", "alice");

        let attachments = render(&wf, &config);
        let fields = attachments[2].fields.as_ref().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].value, "alice,bob");
        assert_eq!(fields[1].value, "<@alice>");
        // The next stage is now the active one
        assert_eq!(attachments[3].color, "#ff0000");
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = Config::default();
        let wf = make_workflow();
        let first = serde_json::to_string(&render(&wf, &config)).unwrap();
        let second = serde_json::to_string(&render(&wf, &config)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_uses_configured_palette() {
        let mut config = Config::default();
        config.colors.attention = "warning".to_string();
        config.colors.description = "#123456".to_string();

        let attachments = render(&make_workflow(), &config);
        assert_eq!(attachments[0].color, "#123456");
        assert_eq!(attachments[1].color, "warning");
    }
}
