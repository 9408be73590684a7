//! Posting pipeline, scheduler and HTTP API for linkpost.
//!
//! The pieces fit together like this:
//! - [`Publisher`]: publishes to a [`SocialPlatform`](linkpost_core::SocialPlatform)
//!   and records each success in the history file, one publish at a time
//! - [`PostingPipeline`]: generate, prepare and publish, with [`PipelineMetrics`]
//! - [`PostingScheduler`]: runs a pipeline cycle on a fixed interval until stopped
//! - [`create_router`]: the JSON HTTP API over the same pipeline

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analytics;
mod api;
mod metrics;
mod pipeline;
mod publisher;
mod scheduler;
mod server;

pub use analytics::{ANALYTICS_PREVIEW_WIDTH, AnalyticsReport, FailedPost, SuccessfulPost, collect_analytics};
pub use api::{AppState, PostRequest, create_router};
pub use metrics::{MetricsSnapshot, PipelineMetrics, StageSnapshot};
pub use pipeline::PostingPipeline;
pub use publisher::{PublishOutcome, Publisher};
pub use scheduler::{PostingScheduler, SchedulerHandle, SchedulerMessage};
pub use server::serve;
