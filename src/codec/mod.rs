//! Bidirectional mapping between a workflow and message attachments
//!
//! The rendered attachments are the only place workflow state is stored, so
//! `parse(render(w))` must rebuild a workflow equivalent to `w`.

mod parse;
mod render;


pub use parse::{decode_mention, parse, Record};
pub use render::{mention, render};
