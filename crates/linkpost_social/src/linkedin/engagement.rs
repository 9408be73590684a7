//! Engagement endpoint probing and response parsing.
//!
//! LinkedIn exposes engagement under several read endpoints depending on the
//! post type and the app's permissions. Two response shapes are recognised:
//!
//! ```text
//! { "socialDetail": { "totalSocialActivityCounts":
//!     { "numLikes": 5, "numComments": 2, "numShares": 1 } } }
//!
//! { "likesSummary": { "totalLikes": 3 },
//!   "commentsSummary": { "totalFirstLevelComments": 1 },
//!   "shareStatistics": { "shareCount": 0 } }
//! ```

use linkpost_core::EngagementRecord;
use serde_json::Value;

const URN_PREFIXES: [&str; 2] = ["urn:li:share:", "urn:li:ugcPost:"];

/// Strip the share/ugcPost URN prefix, leaving the bare post id.
///
/// Identifiers without a known prefix are returned unchanged.
///
/// # Examples
///
/// ```
/// use linkpost_social::bare_post_id;
///
/// assert_eq!(bare_post_id("urn:li:share:123"), "123");
/// assert_eq!(bare_post_id("urn:li:ugcPost:456"), "456");
/// assert_eq!(bare_post_id("789"), "789");
/// ```
pub fn bare_post_id(urn: &str) -> &str {
    URN_PREFIXES
        .iter()
        .find_map(|prefix| urn.strip_prefix(prefix))
        .unwrap_or(urn)
}

/// Read endpoints to try, in order, for one post.
pub fn engagement_endpoints(api_base: &str, urn: &str) -> Vec<String> {
    let id = bare_post_id(urn);
    ["shares", "ugcPosts", "socialMetadata"]
        .iter()
        .map(|resource| format!("{}/{}/{}", api_base, resource, id))
        .collect()
}

/// Extract counts from either known response shape.
///
/// The shape is chosen by its top-level key: `socialDetail` first, then
/// `likesSummary`. Missing fields within the chosen shape count as 0. A body
/// with neither key yields all zeros. `views` is always 0.
pub fn parse_engagement(data: &Value) -> EngagementRecord {
    let count = |root: &Value, pointer: &str| {
        root.pointer(pointer).and_then(Value::as_u64).unwrap_or(0)
    };

    if let Some(detail) = data.get("socialDetail") {
        return EngagementRecord {
            likes: count(detail, "/totalSocialActivityCounts/numLikes"),
            comments: count(detail, "/totalSocialActivityCounts/numComments"),
            shares: count(detail, "/totalSocialActivityCounts/numShares"),
            views: 0,
        };
    }

    if data.get("likesSummary").is_some() {
        return EngagementRecord {
            likes: count(data, "/likesSummary/totalLikes"),
            comments: count(data, "/commentsSummary/totalFirstLevelComments"),
            shares: count(data, "/shareStatistics/shareCount"),
            views: 0,
        };
    }

    EngagementRecord::default()
}
