//! The generate, prepare and publish cycle.

use crate::{PipelineMetrics, PublishOutcome, Publisher};
use linkpost_core::{ContentGenerator, ContentLimits, sanitize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Everything one posting cycle needs, shared by the scheduler and the API.
pub struct PostingPipeline {
    generator: Arc<dyn ContentGenerator>,
    publisher: Publisher,
    limits: ContentLimits,
    metrics: PipelineMetrics,
}

impl PostingPipeline {
    /// Creates a pipeline.
    pub fn new(
        generator: Arc<dyn ContentGenerator>,
        publisher: Publisher,
        limits: ContentLimits,
        metrics: PipelineMetrics,
    ) -> Self {
        Self {
            generator,
            publisher,
            limits,
            metrics,
        }
    }

    /// The publisher posts go through.
    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Content limits applied before publishing.
    pub fn limits(&self) -> ContentLimits {
        self.limits
    }

    /// Metrics recorded by this pipeline.
    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }

    /// Sanitize then truncate raw content.
    pub fn prepare(&self, raw: &str) -> String {
        self.limits.prepare(raw)
    }

    /// Generate content and sanitize it. No truncation is applied.
    ///
    /// Content that is empty after sanitizing counts as a failed generation.
    pub async fn generate(&self) -> Option<String> {
        let content = self
            .generator
            .generate()
            .await
            .map(|raw| sanitize(&raw))
            .filter(|content| !content.is_empty());
        self.metrics.record_generation(content.is_some());
        content
    }

    /// Publish already prepared content.
    pub async fn publish(&self, content: &str) -> PublishOutcome {
        let outcome = self.publisher.publish(content).await;
        self.metrics.record_posting(outcome.is_success());
        outcome
    }

    /// One full cycle: generate, prepare, publish.
    ///
    /// Returns `None` when generation failed and nothing was published.
    #[instrument(skip(self))]
    pub async fn run_cycle(&self) -> Option<PublishOutcome> {
        let Some(generated) = self.generate().await else {
            warn!("Generation failed, skipping cycle");
            return None;
        };

        let content = self.prepare(&generated);
        let outcome = self.publish(&content).await;
        match &outcome {
            PublishOutcome::Published { urn } => info!(urn = %urn, "Cycle posted content"),
            PublishOutcome::Failed { details } => warn!(details = %details, "Cycle failed to post"),
        }
        Some(outcome)
    }
}

impl std::fmt::Debug for PostingPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostingPipeline")
            .field("publisher", &self.publisher)
            .field("limits", &self.limits)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
