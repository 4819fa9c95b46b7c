//! Workflow state machine
//!
//! The workflow follows a linear progression through its transitions:
//! transitions[0] → transitions[1] → ... → finished.
//! `progress` counts completed transitions and only moves forward one step
//! at a time, when the transition under the cursor is fully approved. A
//! transition with no approvals is complete as soon as the cursor reaches it.

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::{Result, SignoffError};
use crate::schemas::{Field, WorkflowDefinition};

use super::{ApproveOutcome, Transition};

/// An ordered sequence of transitions with a progress cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    title: String,
    description: String,
    fields: Vec<Field>,
    transitions: Vec<Transition>,
    progress: usize,
}

/// Snapshot of where a workflow stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowStatus {
    pub title: String,
    pub progress: usize,
    pub goal: usize,
    pub finished: bool,

    /// Title of the active transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    /// Keys of the active transition's approvals still pending
    pub pending: Vec<String>,
}

impl Workflow {
    /// Build a workflow, moving the cursor past any leading transitions that
    /// are already fully approved.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<Field>,
        transitions: Vec<Transition>,
    ) -> Self {
        let mut workflow = Workflow {
            title: title.into(),
            description: description.into(),
            fields,
            transitions,
            progress: 0,
        };
        workflow.skip_completed();
        workflow
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Number of fully completed transitions
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Number of transitions
    pub fn goal(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.progress == self.goal()
    }

    /// The transition under the cursor.
    ///
    /// # Errors
    /// * `WorkflowFinished` - If every transition has been completed
    pub fn current_transition(&self) -> Result<&Transition> {
        self.transitions
            .get(self.progress)
            .ok_or(SignoffError::WorkflowFinished {
                progress: self.progress,
                goal: self.goal(),
            })
    }

    /// Present an approve key on behalf of `approved_by`.
    ///
    /// Only approvals of the current transition are considered, so keys of
    /// past or future transitions never match. When the key completes the
    /// current transition the cursor moves forward, then on past any
    /// following transitions that are already complete.
    pub fn approve(&mut self, approve_key: &str, approved_by: &str) -> ApproveOutcome {
        let progress = self.progress;
        let Some(stage) = self.transitions.get_mut(progress) else {
            debug!(approve_key, "workflow already finished, ignoring approval");
            return ApproveOutcome::Ignored;
        };

        let flipped = match stage.approval_mut(approve_key) {
            Some(approval) => approval.approve(approve_key, approved_by),
            None => {
                debug!(approve_key, stage = progress, "no approval with this key in current stage");
                false
            }
        };

        if !stage.is_all_approved() {
            if !flipped {
                return ApproveOutcome::Ignored;
            }
            debug!(approve_key, approved_by, stage = progress, "approval recorded");
            return ApproveOutcome::Recorded;
        }

        let title = stage.title().to_string();
        self.skip_completed();
        info!(stage = %title, progress = self.progress, goal = self.goal(), "transition completed");
        ApproveOutcome::Advanced {
            progress: self.progress,
        }
    }

    /// Move the cursor one step, never past the goal
    fn advance(&mut self) {
        if self.progress < self.goal() {
            self.progress += 1;
        }
    }

    /// Advance while the transition under the cursor is fully approved
    fn skip_completed(&mut self) {
        while self
            .transitions
            .get(self.progress)
            .is_some_and(Transition::is_all_approved)
        {
            self.advance();
        }
    }

    pub fn status(&self) -> WorkflowStatus {
        let current = self.current_transition().ok();
        WorkflowStatus {
            title: self.title.clone(),
            progress: self.progress,
            goal: self.goal(),
            finished: self.is_finished(),
            current: current.map(|t| t.title().to_string()),
            pending: current
                .map(|t| t.pending().map(|a| a.approve_key.clone()).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<WorkflowDefinition> for Workflow {
    fn from(def: WorkflowDefinition) -> Self {
        Workflow::new(
            def.title,
            def.description,
            def.fields,
            def.transitions.into_iter().map(Transition::from).collect(),
        )
    }
}
