//! Domain logic for approval workflows

mod approval;
mod outcome;
mod transition;
mod workflow;


pub use approval::Approval;
pub use outcome::ApproveOutcome;
pub use transition::Transition;
pub use workflow::{Workflow, WorkflowStatus};
