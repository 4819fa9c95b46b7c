//! Config schema - Presentation settings shared by render and parse

use serde::{Deserialize, Serialize};

use super::Confirmation;

/// What to do with an approval record that precedes every transition marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Reject the message
    #[default]
    Fail,
    /// Drop the record and keep parsing
    Skip,
}

/// Field titles and button text used on the wire
///
/// `approval_required` and `approved_by` double as the sentinels the parser
/// looks for, so render and parse must agree on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_approval_required")]
    pub approval_required: String,

    #[serde(default = "default_approved_by")]
    pub approved_by: String,

    #[serde(default = "default_approve_button")]
    pub approve_button: String,
}

fn default_approval_required() -> String {
    "下記のいずれかの方の承認が必要です".to_string()
}

fn default_approved_by() -> String {
    "✅ Approved by".to_string()
}

fn default_approve_button() -> String {
    "Approve".to_string()
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            approval_required: default_approval_required(),
            approved_by: default_approved_by(),
            approve_button: default_approve_button(),
        }
    }
}

/// Attachment colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Completed stages and approvals
    #[serde(default = "default_success")]
    pub success: String,

    /// Pending items in the active stage
    #[serde(default = "default_attention")]
    pub attention: String,

    /// Pending items in future stages
    #[serde(default)]
    pub neutral: String,

    /// The leading description attachment
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_success() -> String {
    "#00ff00".to_string()
}

fn default_attention() -> String {
    "#ff0000".to_string()
}

fn default_description() -> String {
    "#000000".to_string()
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            success: default_success(),
            attention: default_attention(),
            neutral: String::new(),
            description: default_description(),
        }
    }
}

fn default_confirm() -> Confirmation {
    Confirmation {
        title: "Confirm".to_string(),
        text: "Do you really approve?".to_string(),
        ok_text: "Yes".to_string(),
        dismiss_text: "No".to_string(),
    }
}

/// Main configuration for signoff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub labels: Labels,

    #[serde(default)]
    pub colors: Palette,

    /// Dialog attached to every approve button
    #[serde(default = "default_confirm")]
    pub confirm: Confirmation,

    #[serde(default)]
    pub orphan_policy: OrphanPolicy,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            labels: Labels::default(),
            colors: Palette::default(),
            confirm: default_confirm(),
            orphan_policy: OrphanPolicy::Fail,
        }
    }
}
