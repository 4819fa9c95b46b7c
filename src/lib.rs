//! Signoff - Multi-stage approval workflows stored in chat message attachments
//!
//! There is no database: a workflow is rendered into a message's
//! attachments and parsed back out of them on every button press.
//!
//! This library provides:
//! - Schema definitions for attachments, payloads, definitions and config
//! - Domain logic for approvals, transitions and workflow progress
//! - The render/parse codec between workflows and attachments
//! - The parse → approve → render invocation handler

pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod handler;
pub mod schemas;

// Re-export commonly used types
pub use codec::{parse, render};
pub use domain::{Approval, ApproveOutcome, Transition, Workflow};
pub use errors::{Result, SignoffError};
pub use handler::{handle_action, handle_invocation, ApprovalAction};
pub use schemas::{Attachment, Config, Invocation, Message};
