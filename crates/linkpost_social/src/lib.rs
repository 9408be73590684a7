//! Social platform integrations for linkpost.
//!
//! Provides a LinkedIn client implementing
//! [`SocialPlatform`](linkpost_core::SocialPlatform):
//! - publishing plain-text UGC shares
//! - probing the read endpoints for engagement counts
//!
//! # Example
//!
//! ```no_run
//! use linkpost_core::SocialPlatform;
//! use linkpost_social::{LinkedInClient, LinkedInConfigBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LinkedInConfigBuilder::default()
//!     .access_token("token")
//!     .author_urn("urn:li:person:abc123")
//!     .build()?;
//! let client = LinkedInClient::new(config)?;
//!
//! let urn = client.publish("Hello from linkpost").await?;
//! if let Some(engagement) = client.fetch_engagement(&urn).await {
//!     println!("{} likes", engagement.likes);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod linkedin;

pub use linkedin::{
    DEFAULT_API_BASE, DEFAULT_SOCIAL_TIMEOUT, LinkedInClient, LinkedInConfig,
    LinkedInConfigBuilder, LinkedInResult, ShareCommentary, ShareContent, SharePayload,
    SpecificContent, Visibility, bare_post_id, engagement_endpoints, parse_engagement,
};
pub use linkpost_error::{SocialError, SocialErrorKind};
