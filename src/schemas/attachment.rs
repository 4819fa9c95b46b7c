//! Attachment schema - The message attachment wire format
//!
//! These mirror the chat platform's legacy message attachments. Unknown
//! keys sent by the platform (`id`, `fallback`, ...) are ignored on input.

use serde::{Deserialize, Serialize};

/// A labeled title/value pair shown in an attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub title: String,

    pub value: String,

    /// Whether the platform may lay the field out side by side
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub short: bool,
}

impl Field {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Field {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }
}

/// Confirmation dialog shown before an action fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub title: String,
    pub text: String,
    pub ok_text: String,
    pub dismiss_text: String,
}

/// An interactive control attached to an attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Name reported back when the control is used
    pub name: String,

    /// Button label
    pub text: String,

    /// Control type (always "button" for approvals)
    #[serde(rename = "type")]
    pub kind: String,

    /// Value reported back when the control is used
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirmation>,
}

/// A single message attachment, the unit of the persisted workflow state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Hex color, or empty for the platform default
    #[serde(default)]
    pub color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,

    /// Identifier of the approval this attachment represents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
}

impl Attachment {
    /// Iterate the fields, empty when there are none
    pub fn field_iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().flatten()
    }

    /// Whether the attachment carries any interactive control
    pub fn has_actions(&self) -> bool {
        self.actions.as_ref().is_some_and(|a| !a.is_empty())
    }
}
