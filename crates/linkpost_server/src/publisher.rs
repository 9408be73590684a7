//! Publishing with history bookkeeping.

use linkpost_core::SocialPlatform;
use linkpost_storage::HistoryStore;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};

/// Result of one publish attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PublishOutcome {
    /// The platform accepted the post and it was recorded in history.
    Published {
        /// Identifier assigned by the platform
        urn: String,
    },
    /// Nothing was recorded.
    Failed {
        /// Upstream response body or error message
        details: String,
    },
}

impl PublishOutcome {
    /// Whether the post was published and recorded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Published { .. })
    }
}

/// Publishes content and appends each success to the history file.
///
/// Publish and append happen under one lock, so concurrent callers (the
/// scheduler and the HTTP API) are serialized and history order matches
/// publish order.
pub struct Publisher {
    platform: Arc<dyn SocialPlatform>,
    history: Arc<HistoryStore>,
    lock: Mutex<()>,
}

impl Publisher {
    /// Creates a publisher over `platform` recording into `history`.
    pub fn new(platform: Arc<dyn SocialPlatform>, history: Arc<HistoryStore>) -> Self {
        Self {
            platform,
            history,
            lock: Mutex::new(()),
        }
    }

    /// The platform posts are sent to.
    pub fn platform(&self) -> &Arc<dyn SocialPlatform> {
        &self.platform
    }

    /// The history store successes are recorded in.
    pub fn history(&self) -> &Arc<HistoryStore> {
        &self.history
    }

    /// Publish already prepared `content`.
    ///
    /// On rejection the history file is left untouched. A post the platform
    /// accepted but that could not be recorded is reported as failed.
    #[instrument(skip(self, content), fields(chars = content.chars().count()))]
    pub async fn publish(&self, content: &str) -> PublishOutcome {
        let _guard = self.lock.lock().await;

        let urn = match self.platform.publish(content).await {
            Ok(urn) => urn,
            Err(e) => {
                warn!(error = %e, "Publish rejected");
                return PublishOutcome::Failed {
                    details: e.kind.details(),
                };
            }
        };

        match self.history.append(content, &urn).await {
            Ok(_) => {
                info!(urn = %urn, "Post published and recorded");
                PublishOutcome::Published { urn }
            }
            Err(e) => {
                error!(urn = %urn, error = %e, "Post published but not recorded");
                PublishOutcome::Failed {
                    details: e.to_string(),
                }
            }
        }
    }
}

impl std::fmt::Debug for Publisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("history", &self.history.path())
            .finish_non_exhaustive()
    }
}
