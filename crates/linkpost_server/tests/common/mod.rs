//! In-memory fakes shared by the server tests.

#![allow(dead_code)]

use async_trait::async_trait;
use linkpost_core::{ContentGenerator, ContentLimits, EngagementRecord, SocialPlatform};
use linkpost_error::{SocialError, SocialErrorKind};
use linkpost_server::{PipelineMetrics, PostingPipeline, Publisher};
use linkpost_storage::HistoryStore;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Generator returning a fixed reply and counting calls.
pub struct FakeGenerator {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(&self) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

/// Platform assigning sequential identifiers, or rejecting every post.
pub struct FakePlatform {
    rejection: Option<String>,
    published: parking_lot::Mutex<Vec<String>>,
    engagement: HashMap<String, EngagementRecord>,
    next_id: AtomicUsize,
}

impl FakePlatform {
    pub fn accepting() -> Self {
        Self {
            rejection: None,
            published: parking_lot::Mutex::new(Vec::new()),
            engagement: HashMap::new(),
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn rejecting(body: &str) -> Self {
        Self {
            rejection: Some(body.to_string()),
            ..Self::accepting()
        }
    }

    pub fn with_engagement(mut self, urn: &str, record: EngagementRecord) -> Self {
        self.engagement.insert(urn.to_string(), record);
        self
    }

    pub fn published(&self) -> Vec<String> {
        self.published.lock().clone()
    }
}

#[async_trait]
impl SocialPlatform for FakePlatform {
    async fn publish(&self, content: &str) -> Result<String, SocialError> {
        if let Some(body) = &self.rejection {
            return Err(SocialError::new(SocialErrorKind::Api {
                status_code: 401,
                message: body.clone(),
            }));
        }
        tokio::task::yield_now().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.published.lock().push(content.to_string());
        Ok(format!("urn:li:share:{}", id))
    }

    async fn fetch_engagement(&self, urn: &str) -> Option<EngagementRecord> {
        self.engagement.get(urn).copied()
    }
}

pub struct Harness {
    pub generator: Arc<FakeGenerator>,
    pub platform: Arc<FakePlatform>,
    pub history: Arc<HistoryStore>,
    pub pipeline: Arc<PostingPipeline>,
}

pub fn harness(generator: FakeGenerator, platform: FakePlatform, path: &Path) -> Harness {
    let generator = Arc::new(generator);
    let platform = Arc::new(platform);
    let history = Arc::new(HistoryStore::new(path));
    let publisher = Publisher::new(platform.clone(), history.clone());
    let limits = ContentLimits::new(40).expect("valid limit");
    let pipeline = Arc::new(PostingPipeline::new(
        generator.clone(),
        publisher,
        limits,
        PipelineMetrics::new(),
    ));
    Harness {
        generator,
        platform,
        history,
        pipeline,
    }
}
