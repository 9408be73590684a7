//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the linkpost binary.

mod commands;
mod serve;
mod tasks;

pub use commands::{Cli, Commands};
pub use serve::handle_serve;
pub use tasks::{handle_analytics, handle_generate, handle_post, handle_run_once};
