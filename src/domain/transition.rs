//! Transition - a stage that passes once all of its approvals pass

use crate::schemas::TransitionDefinition;

use super::Approval;

/// An ordered group of approvals that must all pass before the workflow moves on
///
/// Only the approval state of the children can change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    title: String,
    approvals: Vec<Approval>,
}

impl Transition {
    pub fn new(title: impl Into<String>, approvals: Vec<Approval>) -> Self {
        Transition {
            title: title.into(),
            approvals,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn approvals(&self) -> &[Approval] {
        &self.approvals
    }

    /// True when every approval has passed (vacuously true when there are none)
    pub fn is_all_approved(&self) -> bool {
        self.approvals.iter().all(Approval::is_approved)
    }

    /// Approvals still waiting for their key
    pub fn pending(&self) -> impl Iterator<Item = &Approval> {
        self.approvals.iter().filter(|a| !a.is_approved())
    }

    /// Find the approval with the given key
    pub(crate) fn approval_mut(&mut self, key: &str) -> Option<&mut Approval> {
        self.approvals.iter_mut().find(|a| a.approve_key == key)
    }
}

impl From<TransitionDefinition> for Transition {
    fn from(def: TransitionDefinition) -> Self {
        Transition::new(def.title, def.approvals.into_iter().map(Approval::from).collect())
    }
}
