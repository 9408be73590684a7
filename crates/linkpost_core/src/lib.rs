//! Core data types and component traits for linkpost.
//!
//! This crate provides the types shared by every linkpost component:
//! - [`PostRecord`]: one published post as kept in the history file
//! - [`EngagementRecord`]: interaction counts fetched for a post
//! - [`ContentLimits`], [`sanitize`], [`truncate`]: content preparation
//! - [`ContentGenerator`], [`SocialPlatform`]: seams for the two upstream APIs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content;
mod engagement;
mod record;
mod traits;

pub use content::{ContentLimits, ELLIPSIS, preview, sanitize, truncate};
pub use engagement::EngagementRecord;
pub use record::{PostRecord, history_timestamp};
pub use traits::{ContentGenerator, SocialPlatform};
