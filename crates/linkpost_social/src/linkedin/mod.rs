//! LinkedIn REST API integration.

mod client;
mod config;
mod dto;
mod engagement;

pub use client::LinkedInClient;
pub use config::{DEFAULT_API_BASE, DEFAULT_SOCIAL_TIMEOUT, LinkedInConfig, LinkedInConfigBuilder};
pub use dto::{ShareCommentary, ShareContent, SharePayload, SpecificContent, Visibility};
pub use engagement::{bare_post_id, engagement_endpoints, parse_engagement};

/// Result type for LinkedIn operations.
pub type LinkedInResult<T> = Result<T, linkpost_error::SocialError>;
