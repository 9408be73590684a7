//! REST client for `generateContent`.

use super::GeminiResult;
use crate::{GeminiConfig, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use linkpost_core::ContentGenerator;
use linkpost_error::{GeminiError, GeminiErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for the Gemini `generateContent` endpoint.
///
/// Sends the configured prompt and returns the first candidate's text.
/// The configured timeout covers the whole request.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    #[instrument(skip(config), fields(url = %config.url()))]
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let client = Client::builder()
            .timeout(*config.timeout())
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!("Created Gemini client");
        Ok(Self { client, config })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Request one piece of content.
    ///
    /// # Errors
    ///
    /// - `ApiRequest` when the request fails or times out
    /// - `HttpError` for any non-2xx status
    /// - `Parse` when the body is not a `generateContent` response
    /// - `EmptyResponse` when no candidate carries text
    #[instrument(skip(self), fields(url = %self.config.url()))]
    pub async fn generate_content(&self) -> GeminiResult<String> {
        let payload = GenerateContentRequest::from_prompt(self.config.prompt().as_str());

        let mut request = self
            .client
            .post(self.config.url())
            .header("Content-Type", "application/json")
            .json(&payload);

        if let Some(api_key) = self.config.api_key() {
            request = request.header("x-goog-api-key", api_key);
        }

        debug!("Sending generateContent request");
        let response = request.send().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        let body = response.text().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::new(GeminiErrorKind::Parse(e.to_string())))?;

        let text = parsed
            .first_text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        debug!(chars = text.chars().count(), "Received generated content");
        Ok(text)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self) -> Option<String> {
        match self.generate_content().await {
            Ok(text) => Some(text),
            Err(e) => {
                error!(error = %e, url = %self.config.url(), "Gemini API error");
                None
            }
        }
    }
}
