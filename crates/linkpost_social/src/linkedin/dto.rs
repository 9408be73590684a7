//! Wire types for UGC share creation.

use serde::{Deserialize, Serialize};

/// Body of `POST /ugcPosts` for a public, text-only share.
///
/// # Examples
///
/// ```
/// use linkpost_social::SharePayload;
///
/// let payload = SharePayload::text("urn:li:person:me", "Hello");
/// let json = serde_json::to_value(&payload).unwrap();
/// assert_eq!(json["lifecycleState"], "PUBLISHED");
/// assert_eq!(
///     json["specificContent"]["com.linkedin.ugc.ShareContent"]["shareCommentary"]["text"],
///     "Hello"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    /// Author URN
    pub author: String,
    /// Always `PUBLISHED`
    pub lifecycle_state: String,
    /// Share body
    pub specific_content: SpecificContent,
    /// Audience
    pub visibility: Visibility,
}

impl SharePayload {
    /// Public plain-text share by `author`.
    pub fn text(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            lifecycle_state: "PUBLISHED".to_string(),
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text: text.into() },
                    share_media_category: "NONE".to_string(),
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC".to_string(),
            },
        }
    }
}

/// Wrapper keyed by the share content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificContent {
    /// Share content
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

/// Text and media category of a share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent {
    /// Share text
    pub share_commentary: ShareCommentary,
    /// `NONE` for text-only shares
    pub share_media_category: String,
}

/// Share text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCommentary {
    /// Text body
    pub text: String,
}

/// Share audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    /// `PUBLIC`
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: String,
}
