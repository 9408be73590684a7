//! Engagement report over the post history.

use linkpost_core::{EngagementRecord, PostRecord, SocialPlatform, preview};
use linkpost_error::LinkpostResult;
use linkpost_storage::HistoryStore;
use serde::Serialize;
use tracing::{info, instrument};

/// Characters of content shown for posts whose engagement is unavailable.
pub const ANALYTICS_PREVIEW_WIDTH: usize = 50;

/// A post with its engagement counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessfulPost {
    /// Full post content
    pub content: String,
    /// When the post was recorded
    pub timestamp: String,
    /// Platform identifier
    pub urn: String,
    /// Engagement counts
    #[serde(flatten)]
    pub engagement: EngagementRecord,
}

/// A post whose engagement could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPost {
    /// Platform identifier
    pub urn: String,
    /// Content preview
    pub content: String,
    /// When the post was recorded
    pub timestamp: String,
}

/// Engagement for every recorded post, split by whether it could be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsReport {
    /// Posts with engagement
    pub successful_posts: Vec<SuccessfulPost>,
    /// Posts without engagement
    pub failed_posts: Vec<FailedPost>,
    /// Number of recorded posts
    pub total_posts: usize,
    /// Length of `successful_posts`
    pub successful_count: usize,
    /// Length of `failed_posts`
    pub failed_count: usize,
}

impl AnalyticsReport {
    fn from_results(results: Vec<(PostRecord, Option<EngagementRecord>)>) -> Self {
        let total_posts = results.len();
        let mut successful_posts = Vec::new();
        let mut failed_posts = Vec::new();

        for (post, engagement) in results {
            match engagement {
                Some(engagement) => successful_posts.push(SuccessfulPost {
                    content: post.content().clone(),
                    timestamp: post.timestamp().clone(),
                    urn: post.urn().clone(),
                    engagement,
                }),
                None => failed_posts.push(FailedPost {
                    urn: post.urn().clone(),
                    content: preview(post.content(), ANALYTICS_PREVIEW_WIDTH),
                    timestamp: post.timestamp().clone(),
                }),
            }
        }

        Self {
            successful_count: successful_posts.len(),
            failed_count: failed_posts.len(),
            successful_posts,
            failed_posts,
            total_posts,
        }
    }
}

/// Fetch engagement for every recorded post, one post at a time.
///
/// Returns `Ok(None)` when there is no history file; nothing is created.
///
/// # Errors
///
/// Returns a storage error if the history file exists but cannot be read
/// or parsed. The file is never modified.
#[instrument(skip_all, fields(path = %history.path().display()))]
pub async fn collect_analytics(
    history: &HistoryStore,
    platform: &dyn SocialPlatform,
) -> LinkpostResult<Option<AnalyticsReport>> {
    if !history.exists().await {
        return Ok(None);
    }

    let posts = history.load().await?;
    let mut results = Vec::with_capacity(posts.len());
    for post in posts {
        let engagement = platform.fetch_engagement(post.urn()).await;
        results.push((post, engagement));
    }

    let report = AnalyticsReport::from_results(results);
    info!(
        total = report.total_posts,
        successful = report.successful_count,
        failed = report.failed_count,
        "Collected analytics"
    );
    Ok(Some(report))
}
