//! Content preparation: whitespace normalization and length limits.

use linkpost_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Marker appended to truncated content.
pub const ELLIPSIS: &str = "...";

/// Smallest character limit that leaves room for one character plus [`ELLIPSIS`].
const MIN_CHAR_LIMIT: usize = ELLIPSIS.len() + 1;

/// Collapse every run of whitespace (newlines included) into a single space
/// and trim both ends.
///
/// # Examples
///
/// ```
/// use linkpost_core::sanitize;
///
/// assert_eq!(sanitize("  Use\n\nhooks\t wisely  "), "Use hooks wisely");
/// ```
pub fn sanitize(content: &str) -> String {
    content.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Limit `content` to `limit` characters.
///
/// Content over the limit keeps its first `limit - 3` characters followed by
/// `...`. Lengths count characters, not bytes. When `limit` is below 3 the
/// marker does not fit and the content is cut to `limit` characters.
///
/// # Examples
///
/// ```
/// use linkpost_core::truncate;
///
/// assert_eq!(truncate("abcdefghijklmno", 10), "abcdefg...");
/// assert_eq!(truncate("short", 10), "short");
/// ```
pub fn truncate(content: &str, limit: usize) -> String {
    if content.chars().count() <= limit {
        return content.to_string();
    }
    if limit < ELLIPSIS.len() {
        return content.chars().take(limit).collect();
    }
    let mut truncated: String = content.chars().take(limit - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Short display form of a post: the first `width` characters followed by `...`.
///
/// The marker is always appended, even when the content is already short.
pub fn preview(content: &str, width: usize) -> String {
    let mut shown: String = content.chars().take(width).collect();
    shown.push_str(ELLIPSIS);
    shown
}

/// Length limits applied to outgoing posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLimits {
    char_limit: usize,
}

impl ContentLimits {
    /// Create limits for the given character budget.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the limit cannot hold at least one
    /// character plus the ellipsis marker.
    pub fn new(char_limit: usize) -> Result<Self, ConfigError> {
        if char_limit < MIN_CHAR_LIMIT {
            return Err(ConfigError::new(format!(
                "CHAR_LIMIT must be at least {}, got {}",
                MIN_CHAR_LIMIT, char_limit
            )));
        }
        Ok(Self { char_limit })
    }

    /// Maximum post length in characters.
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    /// Sanitize then truncate, the order every outgoing post goes through.
    pub fn prepare(&self, raw: &str) -> String {
        truncate(&sanitize(raw), self.char_limit)
    }
}
