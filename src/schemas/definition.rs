//! Definition schema - Authoring format for new workflows

use serde::{Deserialize, Serialize};

use super::Field;

/// One approval gate as written by a workflow author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalDefinition {
    /// Key the approve button reports back; unique within its transition
    pub approve_key: String,

    #[serde(default)]
    pub description: String,

    /// Users shown as eligible approvers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approvers: Option<Vec<String>>,

    /// Seed the gate as already approved by this user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

/// One stage as written by a workflow author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub title: String,

    #[serde(default)]
    pub approvals: Vec<ApprovalDefinition>,
}

/// A workflow definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub title: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    pub transitions: Vec<TransitionDefinition>,
}
