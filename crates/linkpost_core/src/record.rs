//! Published post records.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Render a timestamp the way the history file stores it.
///
/// Naive UTC ISO-8601 with microseconds, e.g. `2025-03-01T09:30:00.000123`.
pub fn history_timestamp(at: DateTime<Utc>) -> String {
    at.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// One successfully published post.
///
/// Records are immutable once created; fields are exposed through getters only.
///
/// # Examples
///
/// ```
/// use linkpost_core::PostRecord;
///
/// let record = PostRecord::new("urn:li:share:42", "Hello", "2025-01-01T00:00:00.000000");
/// assert_eq!(record.urn(), "urn:li:share:42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct PostRecord {
    /// Identifier assigned by the social platform.
    urn: String,
    /// Text that was published.
    content: String,
    /// Creation time, ISO-8601.
    timestamp: String,
}

impl PostRecord {
    /// Create a record from its parts.
    pub fn new(
        urn: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            urn: urn.into(),
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Create a record stamped with the current UTC time.
    pub fn published_now(urn: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(urn, content, history_timestamp(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_history_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 5).unwrap();
        assert_eq!(history_timestamp(at), "2025-03-01T09:30:05.000000");
    }

    #[test]
    fn test_serialized_field_names() {
        let record = PostRecord::new("urn:li:share:1", "hi", "2025-03-01T09:30:05.000000");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["urn"], "urn:li:share:1");
        assert_eq!(json["content"], "hi");
        assert_eq!(json["timestamp"], "2025-03-01T09:30:05.000000");
    }
}
