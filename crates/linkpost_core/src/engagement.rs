//! Engagement counts for a published post.

use serde::{Deserialize, Serialize};

/// Aggregate interaction counts for one post.
///
/// Every field defaults to 0 when the upstream response does not carry it.
/// `views` is never reported by the known response shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngagementRecord {
    /// Number of likes/reactions
    pub likes: u64,
    /// Number of first-level comments
    pub comments: u64,
    /// Number of reshares
    pub shares: u64,
    /// Number of impressions
    pub views: u64,
}
