//! Flat-file post history for linkpost.
//!
//! Every published post is appended to a single JSON array file. The whole
//! file is read and rewritten on each append, which is fine for the
//! once-a-minute write rate of the posting pipeline.
//!
//! # Example
//!
//! ```rust
//! use linkpost_storage::HistoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = HistoryStore::new("/tmp/post_history.json");
//! let record = store.append("Hooks run in order ⚛️", "urn:li:share:123").await?;
//! assert_eq!(record.urn(), "urn:li:share:123");
//!
//! let history = store.load().await?;
//! assert!(!history.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod history;

pub use history::HistoryStore;
pub use linkpost_error::{StorageError, StorageErrorKind};
