//! LinkedIn client configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use std::time::Duration;

/// Base URL of the LinkedIn v2 REST API.
pub const DEFAULT_API_BASE: &str = "https://api.linkedin.com/v2";

/// Timeout applied to every LinkedIn request.
pub const DEFAULT_SOCIAL_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`LinkedInClient`](crate::LinkedInClient).
#[derive(Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct LinkedInConfig {
    /// OAuth bearer token
    access_token: String,
    /// Author of every share, e.g. `urn:li:person:abc123`
    author_urn: String,
    /// API base URL without trailing slash
    #[builder(default = "DEFAULT_API_BASE.to_string()")]
    api_base: String,
    /// Per-request timeout
    #[builder(default = "DEFAULT_SOCIAL_TIMEOUT")]
    timeout: Duration,
}

impl std::fmt::Debug for LinkedInConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedInConfig")
            .field("access_token", &"<redacted>")
            .field("author_urn", &self.author_urn)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}
