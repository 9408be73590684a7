//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// linkpost - scheduled Gemini-generated LinkedIn posts
#[derive(Parser, Debug)]
#[command(name = "linkpost")]
#[command(about = "Generate content with Gemini and post it to LinkedIn on a schedule", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./linkpost.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON log lines (requires the `observability` feature)
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API and the posting scheduler
    Serve {
        /// Listen address, overriding BIND_ADDRESS
        #[arg(long)]
        bind: Option<String>,

        /// Serve the API without scheduled posting
        #[arg(long)]
        no_scheduler: bool,
    },

    /// Generate one piece of content and print it
    Generate,

    /// Publish the given content
    Post {
        /// Text to publish (sanitized and truncated first)
        content: String,
    },

    /// Run one scheduler cycle: generate, prepare, publish
    RunOnce,

    /// Print engagement for every recorded post
    Analytics,
}
