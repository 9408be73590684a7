//! LinkedIn REST client.

use super::LinkedInResult;
use crate::{LinkedInConfig, SharePayload, engagement_endpoints, parse_engagement};
use async_trait::async_trait;
use linkpost_core::{EngagementRecord, SocialPlatform};
use linkpost_error::{SocialError, SocialErrorKind};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

const RESTLI_PROTOCOL_HEADER: &str = "X-Restli-Protocol-Version";
const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";
const RESTLI_ID_HEADER: &str = "x-restli-id";

/// LinkedIn client for publishing shares and reading their engagement.
#[derive(Debug, Clone)]
pub struct LinkedInClient {
    client: Client,
    config: LinkedInConfig,
}

impl LinkedInClient {
    /// Create a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    #[instrument(skip(config), fields(api_base = %config.api_base()))]
    pub fn new(config: LinkedInConfig) -> LinkedInResult<Self> {
        let client = Client::builder()
            .timeout(*config.timeout())
            .build()
            .map_err(|e| SocialError::new(SocialErrorKind::ClientCreation(e.to_string())))?;

        debug!("Created LinkedIn client");
        Ok(Self { client, config })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &LinkedInConfig {
        &self.config
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(self.config.access_token())
            .header("Content-Type", "application/json")
            .header(RESTLI_PROTOCOL_HEADER, RESTLI_PROTOCOL_VERSION)
    }

    /// Publish a public text share and return its identifier.
    ///
    /// The identifier is read from the response body's `id`, falling back
    /// to the `x-restli-id` header.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` when `content` is blank (no request is sent)
    /// - `Http` on transport failure
    /// - `Api` for any status other than 201, carrying the raw body
    /// - `MissingIdentifier` when a 201 names no post
    #[instrument(skip(self, content), fields(chars = content.chars().count()))]
    pub async fn create_share(&self, content: &str) -> LinkedInResult<String> {
        if content.trim().is_empty() {
            return Err(SocialError::new(SocialErrorKind::EmptyContent));
        }

        let url = format!("{}/ugcPosts", self.config.api_base());
        let payload = SharePayload::text(self.config.author_urn().as_str(), content);

        let response = self
            .authorized(self.client.post(&url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.to_string())))?;

        let status = response.status();
        let header_id = response
            .headers()
            .get(RESTLI_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.to_string())))?;

        if status != StatusCode::CREATED {
            return Err(SocialError::new(SocialErrorKind::Api {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        let body_id = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|json| json.get("id").and_then(Value::as_str).map(str::to_string));

        let urn = body_id
            .or(header_id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| SocialError::new(SocialErrorKind::MissingIdentifier))?;

        info!(urn = %urn, "Published LinkedIn share");
        Ok(urn)
    }

    /// Probe the read endpoints in order until one answers 200.
    ///
    /// Returns `None` once every endpoint has failed.
    #[instrument(skip(self))]
    pub async fn engagement(&self, urn: &str) -> Option<EngagementRecord> {
        for endpoint in engagement_endpoints(self.config.api_base(), urn) {
            let response = match self.authorized(self.client.get(&endpoint)).send().await {
                Ok(response) => response,
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "Engagement request failed");
                    continue;
                }
            };

            match response.status() {
                StatusCode::OK => match response.json::<Value>().await {
                    Ok(data) => {
                        info!(endpoint = %endpoint, "Retrieved engagement data");
                        return Some(parse_engagement(&data));
                    }
                    Err(e) => {
                        warn!(endpoint = %endpoint, error = %e, "Engagement response is not JSON");
                    }
                },
                StatusCode::FORBIDDEN => {
                    let body = response.text().await.unwrap_or_default();
                    warn!(endpoint = %endpoint, body = %body, "Engagement endpoint forbidden");
                }
                status => {
                    warn!(endpoint = %endpoint, status = status.as_u16(), "Engagement endpoint failed");
                }
            }
        }

        error!(urn = %urn, "All engagement endpoints failed; check the app's read permissions");
        None
    }
}

#[async_trait]
impl SocialPlatform for LinkedInClient {
    async fn publish(&self, content: &str) -> Result<String, SocialError> {
        self.create_share(content).await
    }

    async fn fetch_engagement(&self, urn: &str) -> Option<EngagementRecord> {
        self.engagement(urn).await
    }
}
