//! JSON HTTP API over the posting pipeline.

use crate::{PipelineMetrics, PostingPipeline, PublishOutcome, collect_analytics};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, instrument, warn};

/// API state shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pipeline: Arc<PostingPipeline>,
}

impl AppState {
    /// Creates new API state.
    pub fn new(pipeline: Arc<PostingPipeline>) -> Self {
        Self { pipeline }
    }

    fn metrics(&self) -> &PipelineMetrics {
        self.pipeline.metrics()
    }
}

/// Body of `POST /post`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostRequest {
    /// Raw content to publish
    #[serde(default)]
    pub content: Option<String>,
}

/// Creates the API router.
///
/// | Route | Purpose |
/// |---|---|
/// | `GET /generate` | generate and sanitize, without publishing |
/// | `POST /post` | publish the given content |
/// | `POST /generate-and-post` | generate then publish |
/// | `GET /analytics` | engagement for every recorded post |
/// | `GET /health` | liveness |
/// | `GET /metrics` | pipeline metrics snapshot |
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/generate", get(generate))
        .route("/post", post(post_content))
        .route("/generate-and-post", post(generate_and_post))
        .route("/analytics", get(analytics))
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics))
        .with_state(state)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn publish_response(outcome: PublishOutcome, message: &str, content: String) -> Response {
    match outcome {
        PublishOutcome::Published { .. } => (
            StatusCode::OK,
            Json(json!({ "message": message, "content": content })),
        )
            .into_response(),
        PublishOutcome::Failed { details } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to post", "details": details })),
        )
            .into_response(),
    }
}

#[instrument(skip(state))]
async fn generate(State(state): State<AppState>) -> Response {
    match state.pipeline.generate().await {
        Some(content) => (StatusCode::OK, Json(json!({ "content": content }))).into_response(),
        None => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Content generation failed"),
    }
}

#[instrument(skip(state, request))]
async fn post_content(State(state): State<AppState>, Json(request): Json<PostRequest>) -> Response {
    let content = request
        .content
        .map(|raw| state.pipeline.prepare(&raw))
        .filter(|content| !content.is_empty());

    let Some(content) = content else {
        warn!("Post request without content");
        return error_response(StatusCode::BAD_REQUEST, "Missing 'content' in request");
    };

    let outcome = state.pipeline.publish(&content).await;
    publish_response(outcome, "Successfully posted to LinkedIn", content)
}

#[instrument(skip(state))]
async fn generate_and_post(State(state): State<AppState>) -> Response {
    let Some(generated) = state.pipeline.generate().await else {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate content");
    };

    let content = state.pipeline.prepare(&generated);
    let outcome = state.pipeline.publish(&content).await;
    publish_response(outcome, "Content posted", content)
}

#[instrument(skip(state))]
async fn analytics(State(state): State<AppState>) -> Response {
    state.metrics().record_analytics();

    let publisher = state.pipeline.publisher();
    match collect_analytics(publisher.history(), publisher.platform().as_ref()).await {
        Ok(Some(report)) => (StatusCode::OK, Json(report)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "No posts found"),
        Err(e) => {
            error!(error = %e, "Failed to read post history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to read post history", "details": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Get current metrics snapshot.
async fn get_metrics(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.metrics().snapshot()))
}
