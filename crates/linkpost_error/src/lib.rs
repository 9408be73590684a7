//! Error types for linkpost.
//!
//! This crate provides the foundation error types used throughout the linkpost workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use linkpost_error::{LinkpostResult, ConfigError};
//!
//! fn load() -> LinkpostResult<String> {
//!     Err(ConfigError::new("CHAR_LIMIT not set"))?
//! }
//!
//! match load() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod json;
mod server;
mod social;
mod storage;

pub use config::ConfigError;
pub use error::{LinkpostError, LinkpostErrorKind, LinkpostResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use server::{ServerError, ServerErrorKind};
pub use social::{SocialError, SocialErrorKind};
pub use storage::{StorageError, StorageErrorKind};
