//! Gemini client configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use std::time::Duration;

/// Prompt sent on every generation request unless overridden.
pub const DEFAULT_PROMPT: &str = "ReactJS coding tip or joke, limited to 280 characters. Keep it concise, fun, and relevant to ReactJS concepts. Include emojis if appropriate.";

/// Network timeout for one generation request.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for [`GeminiClient`](crate::GeminiClient).
///
/// # Examples
///
/// ```
/// use linkpost_models::{GeminiConfigBuilder, DEFAULT_PROMPT};
///
/// let config = GeminiConfigBuilder::default()
///     .url("http://localhost:8080/generate")
///     .build()
///     .unwrap();
/// assert_eq!(config.prompt(), DEFAULT_PROMPT);
/// assert!(config.api_key().is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// Full `generateContent` endpoint URL
    url: String,
    /// API key sent as `x-goog-api-key`
    #[builder(default, setter(strip_option))]
    api_key: Option<String>,
    /// Fixed prompt
    #[builder(default = "DEFAULT_PROMPT.to_string()")]
    prompt: String,
    /// Per-request timeout
    #[builder(default = "DEFAULT_GENERATION_TIMEOUT")]
    timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("prompt", &self.prompt)
            .field("timeout", &self.timeout)
            .finish()
    }
}
