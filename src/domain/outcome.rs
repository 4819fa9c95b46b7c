//! Result of presenting an approve key to a workflow

/// What an approve attempt did to the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproveOutcome {
    /// Nothing changed: the workflow was finished, the key belongs to no
    /// approval in the current stage, or that approval had already passed
    Ignored,
    /// The approval passed but the stage still has pending approvals
    Recorded,
    /// The approval completed the stage and the workflow moved on
    Advanced {
        /// Progress after the advance
        progress: usize,
    },
}

impl ApproveOutcome {
    /// Check if the attempt changed any state
    pub fn changed(&self) -> bool {
        !matches!(self, ApproveOutcome::Ignored)
    }

    /// Check if the attempt completed the current stage
    pub fn advanced(&self) -> bool {
        matches!(self, ApproveOutcome::Advanced { .. })
    }
}
