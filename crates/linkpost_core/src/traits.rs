//! Seams for the two upstream APIs.

use crate::EngagementRecord;
use async_trait::async_trait;
use linkpost_error::SocialError;

/// Source of fresh post content.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Produce raw (unsanitized) content.
    ///
    /// Returns `None` when generation failed; the failure has already been
    /// logged and callers skip the cycle.
    async fn generate(&self) -> Option<String>;
}

/// A social network that accepts text posts and reports engagement.
#[async_trait]
pub trait SocialPlatform: Send + Sync {
    /// Publish `content` and return the identifier the platform assigned.
    ///
    /// # Errors
    ///
    /// Returns a [`SocialError`] for empty content, transport failures and
    /// any response other than "created".
    async fn publish(&self, content: &str) -> Result<String, SocialError>;

    /// Fetch engagement for a published post.
    ///
    /// Returns `None` when no read endpoint answered successfully.
    async fn fetch_engagement(&self, urn: &str) -> Option<EngagementRecord>;
}
