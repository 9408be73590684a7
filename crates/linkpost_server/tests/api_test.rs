//! Router tests through `tower::ServiceExt::oneshot`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{FakeGenerator, FakePlatform, harness};
use linkpost_core::EngagementRecord;
use linkpost_server::{AppState, create_router};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = serde_json::from_slice(&bytes).expect("JSON body");
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_generate_returns_sanitized_content() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::replying("  Hooks\n\nare   neat  "),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );

    let (status, body) = send(create_router(AppState::new(h.pipeline.clone())), get("/generate")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"content": "Hooks are neat"}));
    assert!(h.platform.published().is_empty());
}

#[tokio::test]
async fn test_generate_failure_is_500() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::failing(),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );

    let (status, body) = send(create_router(AppState::new(h.pipeline.clone())), get("/generate")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Content generation failed"}));
}

#[tokio::test]
async fn test_blank_generation_is_500() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::replying(" \n\t "),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );

    let (status, body) = send(create_router(AppState::new(h.pipeline.clone())), get("/generate")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Content generation failed"}));

    let (status, body) = send(
        create_router(AppState::new(h.pipeline.clone())),
        post_json("/generate-and-post", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to generate content"}));
    assert!(h.platform.published().is_empty());
}

#[tokio::test]
async fn test_post_without_content_is_400_and_publishes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    let h = harness(FakeGenerator::failing(), FakePlatform::accepting(), &path);

    for body in [json!({}), json!({"content": null}), json!({"content": ""}), json!({"content": " \n\t "})] {
        let router = create_router(AppState::new(h.pipeline.clone()));
        let (status, response) = send(router, post_json("/post", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"error": "Missing 'content' in request"}));
    }

    assert!(h.platform.published().is_empty());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_post_prepares_and_records_content() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::failing(),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );
    let raw = "A   very long post\nthat certainly exceeds the forty character limit";

    let (status, body) = send(
        create_router(AppState::new(h.pipeline.clone())),
        post_json("/post", json!({"content": raw})),
    )
    .await;

    let expected = "A very long post that certainly excee...";
    assert_eq!(expected.chars().count(), 40);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Successfully posted to LinkedIn", "content": expected})
    );
    assert_eq!(h.platform.published(), vec![expected.to_string()]);

    let records = h.history.load().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content(), expected);
    assert_eq!(records[0].urn(), "urn:li:share:1");
}

#[tokio::test]
async fn test_post_rejection_reports_details() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    let h = harness(
        FakeGenerator::failing(),
        FakePlatform::rejecting(r#"{"message":"Invalid access token"}"#),
        &path,
    );

    let (status, body) = send(
        create_router(AppState::new(h.pipeline.clone())),
        post_json("/post", json!({"content": "Hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to post", "details": r#"{"message":"Invalid access token"}"#})
    );
    assert!(!path.exists());
}

#[tokio::test]
async fn test_generate_and_post() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::replying("Fresh\ncontent"),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );

    let (status, body) = send(
        create_router(AppState::new(h.pipeline.clone())),
        post_json("/generate-and-post", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Content posted", "content": "Fresh content"}));
    assert_eq!(h.history.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_generate_and_post_generation_failure() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::failing(),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );

    let (status, body) = send(
        create_router(AppState::new(h.pipeline.clone())),
        post_json("/generate-and-post", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to generate content"}));
    assert!(h.platform.published().is_empty());
}

#[tokio::test]
async fn test_analytics_without_history_is_404_and_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    let h = harness(FakeGenerator::failing(), FakePlatform::accepting(), &path);

    let (status, body) = send(create_router(AppState::new(h.pipeline.clone())), get("/analytics")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No posts found"}));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_analytics_partitions_posts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    let platform = FakePlatform::accepting()
        .with_engagement(
            "urn:li:share:1",
            EngagementRecord { likes: 5, comments: 2, shares: 1, views: 0 },
        )
        .with_engagement("urn:li:share:3", EngagementRecord::default());
    let h = harness(FakeGenerator::failing(), platform, &path);

    let long = "L".repeat(60);
    for content in ["first", long.as_str(), "third"] {
        assert!(h.pipeline.publish(content).await.is_success());
    }

    let (status, body) = send(create_router(AppState::new(h.pipeline.clone())), get("/analytics")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_posts"], 3);
    assert_eq!(body["successful_count"], 2);
    assert_eq!(body["failed_count"], 1);
    assert_eq!(body["successful_posts"][0]["urn"], "urn:li:share:1");
    assert_eq!(body["successful_posts"][0]["likes"], 5);
    assert_eq!(body["successful_posts"][0]["comments"], 2);
    assert_eq!(body["successful_posts"][0]["shares"], 1);
    assert_eq!(body["successful_posts"][0]["views"], 0);
    assert_eq!(body["failed_posts"][0]["urn"], "urn:li:share:2");
    assert_eq!(body["failed_posts"][0]["content"], format!("{}...", "L".repeat(50)));
}

#[tokio::test]
async fn test_analytics_corrupt_history_is_500_and_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json").unwrap();
    let h = harness(FakeGenerator::failing(), FakePlatform::accepting(), &path);

    let (status, body) = send(create_router(AppState::new(h.pipeline.clone())), get("/analytics")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to read post history");
    assert!(body["details"].is_string());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
}

#[tokio::test]
async fn test_health_and_metrics() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::replying("hello"),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );
    h.pipeline.run_cycle().await;

    let (status, body) = send(create_router(AppState::new(h.pipeline.clone())), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(create_router(AppState::new(h.pipeline.clone())), get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generation"]["runs"], 1);
    assert_eq!(body["posting"]["runs"], 1);
    assert_eq!(body["posting"]["failures"], 0);
}
