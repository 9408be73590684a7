//! linkpost: scheduled Gemini-generated LinkedIn posts.
//!
//! This crate wires the workspace together for the `linkpost` binary:
//! - [`LinkpostConfig`]: layered configuration (TOML file + environment)
//! - [`build_pipeline`]: Gemini generator + LinkedIn publisher + history file
//! - [`init_logging`]: tracing subscriber setup, with OpenTelemetry export
//!   behind the `observability` feature

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod logging;
#[cfg(feature = "observability")]
mod observability;
mod settings;

pub use app::build_pipeline;
pub use settings::{
    DEFAULT_BIND_ADDRESS, DEFAULT_CONFIG_NAME, DEFAULT_HISTORY_PATH, DEFAULT_POST_INTERVAL,
    LinkpostConfig,
};
pub use logging::{LoggingGuard, init_logging};

// Re-export the workspace so downstream code needs one dependency.
pub use linkpost_core::*;
pub use linkpost_error::*;
pub use linkpost_models::{GeminiClient, GeminiConfig, GeminiConfigBuilder};
pub use linkpost_server::*;
pub use linkpost_social::{LinkedInClient, LinkedInConfig, LinkedInConfigBuilder};
pub use linkpost_storage::HistoryStore;
