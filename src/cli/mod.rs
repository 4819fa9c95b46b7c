//! CLI module for signoff
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Signoff - Multi-stage approval workflows stored in chat message attachments
#[derive(Parser, Debug)]
#[command(name = "signoff")]
#[command(version)]
#[command(about = "Multi-stage approval workflows stored in chat message attachments")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory used to find .signoff/config.json
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Use this config file instead of .signoff/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a workflow definition into message attachments
    Render {
        /// Workflow definition JSON (reads stdin if not provided)
        definition: Option<PathBuf>,

        /// Write the attachments here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply an approval to a rendered workflow and re-render it
    Approve {
        /// Approve key of the pressed button
        #[arg(long)]
        key: String,

        /// Id of the approving user
        #[arg(long)]
        by: String,

        /// Attachments JSON, or a message containing them (reads stdin if not provided)
        attachments: Option<PathBuf>,

        /// Write the attachments here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show where a rendered workflow stands
    Status {
        /// Attachments JSON, or a message containing them (reads stdin if not provided)
        attachments: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Handle an interactive message payload and print the updated message
    Handle {
        /// Payload JSON (reads stdin if not provided)
        payload: Option<PathBuf>,

        /// Write the message here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
