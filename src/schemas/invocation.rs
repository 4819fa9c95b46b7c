//! Invocation schema - The interactive message payload
//!
//! Only the parts of the envelope the handler reads are modelled; other
//! message keys are carried through untouched in `Message::extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Attachment;

/// Action value that marks a button press as an approval
pub const APPROVE_ACTION_VALUE: &str = "approve";

/// A chat message, the only state store a workflow has
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    /// Remaining message keys, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The control a user pressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationAction {
    pub name: String,

    #[serde(default)]
    pub value: String,

    #[serde(rename = "type", default)]
    pub kind: String,
}

/// The user who pressed the control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationUser {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Interactive message payload delivered when a control is pressed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    #[serde(default)]
    pub actions: Option<Vec<InvocationAction>>,

    pub user: InvocationUser,

    pub original_message: Message,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
}

impl Invocation {
    /// The approve key carried by the first action, if that action is an approval
    pub fn approve_key(&self) -> Option<&str> {
        self.actions
            .as_ref()
            .and_then(|actions| actions.first())
            .filter(|action| action.value == APPROVE_ACTION_VALUE)
            .map(|action| action.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r##"{
        "type": "interactive_message",
        "actions": [{"name": "legal", "value": "approve", "type": "button"}],
        "callback_id": "legal",
        "team": {"id": "T47563693", "domain": "watermelonsugar"},
        "user": {"id": "U045VRZFT", "name": "brautigan"},
        "original_message": {
            "text": "Release 1.4",
            "ts": "1458170866.000004",
            "attachments": [{"title": "Release", "text": "Ship it", "color": "#000000"}]
        }
    }"##;

    #[test]
    fn test_invocation_deserialization() {
        let inv: Invocation = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(inv.user.id, "U045VRZFT");
        assert_eq!(inv.approve_key(), Some("legal"));
        assert_eq!(inv.original_message.attachments.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_message_preserves_unknown_keys() {
        let inv: Invocation = serde_json::from_str(PAYLOAD).unwrap();
        let json = serde_json::to_value(&inv.original_message).unwrap();
        assert_eq!(json["ts"], "1458170866.000004");
        assert_eq!(json["text"], "Release 1.4");
    }

    #[test]
    fn test_approve_key_requires_approve_value() {
        let mut inv: Invocation = serde_json::from_str(PAYLOAD).unwrap();
        inv.actions.as_mut().unwrap()[0].value = "reject".to_string();
        assert_eq!(inv.approve_key(), None);

        inv.actions = None;
        assert_eq!(inv.approve_key(), None);
    }
}
