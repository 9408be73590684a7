//! Component wiring.

use crate::LinkpostConfig;
use linkpost_error::LinkpostResult;
use linkpost_models::GeminiClient;
use linkpost_server::{PipelineMetrics, PostingPipeline, Publisher};
use linkpost_social::LinkedInClient;
use linkpost_storage::HistoryStore;
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the production pipeline from configuration.
///
/// # Errors
///
/// Returns an error if either HTTP client cannot be created.
#[instrument(skip(config))]
pub fn build_pipeline(config: &LinkpostConfig) -> LinkpostResult<Arc<PostingPipeline>> {
    let generator = GeminiClient::new(config.gemini().clone())?;
    let platform = LinkedInClient::new(config.linkedin().clone())?;
    let history = Arc::new(HistoryStore::new(config.history_path()));

    info!(
        history = %config.history_path().display(),
        char_limit = config.limits().char_limit(),
        "Pipeline ready"
    );

    Ok(Arc::new(PostingPipeline::new(
        Arc::new(generator),
        Publisher::new(Arc::new(platform), history),
        *config.limits(),
        PipelineMetrics::new(),
    )))
}
