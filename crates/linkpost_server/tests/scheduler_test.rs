//! Scheduler timing and shutdown.

mod common;

use common::{FakeGenerator, FakePlatform, harness};
use linkpost_server::PostingScheduler;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_scheduler_runs_cycles_until_stopped() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::replying("scheduled post"),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );

    let handle = PostingScheduler::spawn(h.pipeline.clone(), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(275)).await;
    handle.stop().await;

    let runs = h.generator.calls();
    assert!(runs >= 2, "expected at least two cycles, got {}", runs);
    assert_eq!(h.history.load().await.unwrap().len(), runs);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(h.generator.calls(), runs);
}

#[tokio::test]
async fn test_first_cycle_waits_one_interval() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::replying("later"),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );

    let handle = PostingScheduler::spawn(h.pipeline.clone(), Duration::from_secs(3600));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(h.generator.calls(), 0);
    handle.stop().await;
}

#[tokio::test]
async fn test_trigger_runs_an_extra_cycle() {
    let dir = TempDir::new().unwrap();
    let h = harness(
        FakeGenerator::replying("on demand"),
        FakePlatform::accepting(),
        &dir.path().join("history.json"),
    );

    let handle = PostingScheduler::spawn(h.pipeline.clone(), Duration::from_secs(3600));
    assert!(handle.trigger().await);
    handle.stop().await;

    // Messages are handled in order, so the triggered cycle ran before shutdown.
    assert_eq!(h.generator.calls(), 1);
    assert_eq!(h.platform.published(), vec!["on demand".to_string()]);
}
