//! Schema types for signoff
//!
//! Wire types match the chat platform's JSON; file types are plain serde.

mod attachment;
mod config;
mod definition;
mod invocation;

pub use attachment::{Action, Attachment, Confirmation, Field};
pub use config::{Config, Labels, OrphanPolicy, Palette};
pub use definition::{ApprovalDefinition, TransitionDefinition, WorkflowDefinition};
pub use invocation::{Invocation, InvocationAction, InvocationUser, Message, APPROVE_ACTION_VALUE};
