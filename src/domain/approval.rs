//! Approval - a single gate unlocked by its key

use crate::schemas::ApprovalDefinition;

/// A yes/no gate that flips to approved when its key is presented
///
/// `approved_by` is private: an approval is approved exactly when it knows
/// who approved it, and once set it never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approval {
    /// Identifier and capability token for this gate
    pub approve_key: String,

    pub description: String,

    /// Users shown as eligible approvers; advisory only
    approvers: Option<Vec<String>>,

    approved_by: Option<String>,
}

impl Approval {
    /// Create a new pending approval
    pub fn new(approve_key: impl Into<String>, description: impl Into<String>) -> Self {
        Approval {
            approve_key: approve_key.into(),
            description: description.into(),
            approvers: None,
            approved_by: None,
        }
    }

    /// Return a new Approval restricted (for display) to the given approvers.
    ///
    /// Approvers travel as one comma-joined field, so entries are split on
    /// `,` and empty ids are dropped.
    pub fn with_approvers(mut self, approvers: Option<Vec<String>>) -> Self {
        self.approvers = approvers.map(|list| {
            list.iter()
                .flat_map(|entry| entry.split(','))
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        });
        self
    }

    pub fn approvers(&self) -> Option<&[String]> {
        self.approvers.as_deref()
    }

    pub fn is_approved(&self) -> bool {
        self.approved_by.is_some()
    }

    pub fn approved_by(&self) -> Option<&str> {
        self.approved_by.as_deref()
    }

    /// Approve this gate if `key` is its key.
    ///
    /// A mismatched key or an already approved gate is silently ignored.
    /// Returns true only when this call flipped the gate.
    pub fn approve(&mut self, key: &str, approved_by: impl Into<String>) -> bool {
        if self.approve_key != key || self.is_approved() {
            return false;
        }
        self.approved_by = Some(approved_by.into());
        true
    }
}

impl From<ApprovalDefinition> for Approval {
    fn from(def: ApprovalDefinition) -> Self {
        let mut approval = Approval::new(def.approve_key, def.description).with_approvers(def.approvers);
        if let Some(by) = def.approved_by {
            let key = approval.approve_key.clone();
            approval.approve(&key, by);
        }
        approval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_approval_is_pending() {
        let approval = Approval::new("qa", "QA sign-off");
        assert!(!approval.is_approved());
        assert!(approval.approved_by().is_none());
        assert!(approval.approvers().is_none());
    }

    #[test]
    fn test_approve_with_matching_key() {
        let mut approval = Approval::new("qa", "QA sign-off");
        assert!(approval.approve("qa", "alice"));
        assert!(approval.is_approved());
        assert_eq!(approval.approved_by(), Some("alice"));
    }

    #[test]
    fn test_approve_with_wrong_key_is_ignored() {
        let mut approval = Approval::new("qa", "QA sign-off");
        assert!(!approval.approve("legal", "alice"));
        assert!(!approval.is_approved());
        assert!(approval.approved_by().is_none());
    }

    #[test]
    fn test_reapproval_keeps_first_approver() {
        let mut approval = Approval::new("qa", "QA sign-off");
        approval.approve("qa", "alice");
        assert!(!approval.approve("qa", "bob"));
        assert_eq!(approval.approved_by(), Some("alice"));
    }

    #[test]
    fn test_approvers_are_not_enforced() {
        let mut approval =
            Approval::new("qa", "QA sign-off").with_approvers(Some(vec!["alice".to_string()]));
        assert!(approval.approve("qa", "mallory"));
        assert_eq!(approval.approved_by(), Some("mallory"));
    }

    #[test]
    fn test_from_definition_seeds_approval() {
        let def = ApprovalDefinition {
            approve_key: "qa".to_string(),
            description: "QA".to_string(),
            approvers: Some(vec!["alice".to_string()]),
            approved_by: Some("alice".to_string()),
        };
        let approval = Approval::from(def);
        assert!(approval.is_approved());
        assert_eq!(approval.approved_by(), Some("alice"));
        assert_eq!(approval.approvers(), Some(&["alice".to_string()][..]));
    }

    #[test]
    fn test_with_approvers_normalizes_ids() {
        let approval = Approval::new("qa", "QA").with_approvers(Some(vec![
            String::new(),
            "alice,bob".to_string(),
            "carol".to_string(),
        ]));
        assert_eq!(
            approval.approvers(),
            Some(&["alice".to_string(), "bob".to_string(), "carol".to_string()][..])
        );

        // An empty list stays distinct from no restriction
        let open = Approval::new("qa", "QA").with_approvers(Some(vec![String::new()]));
        assert_eq!(open.approvers(), Some(&[] as &[String]));
    }
}
