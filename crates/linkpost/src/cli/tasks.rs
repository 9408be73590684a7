//! One-shot command handlers.
//!
//! Each returns whether the operation succeeded; failures have already been
//! logged or printed.

use linkpost::{
    JsonError, LinkpostConfig, LinkpostResult, build_pipeline, collect_analytics,
};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> LinkpostResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(format!("Failed to render output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// Handle the `generate` command.
pub async fn handle_generate(config: &LinkpostConfig) -> LinkpostResult<bool> {
    let pipeline = build_pipeline(config)?;
    match pipeline.generate().await {
        Some(content) => {
            println!("{}", content);
            Ok(true)
        }
        None => {
            eprintln!("Content generation failed");
            Ok(false)
        }
    }
}

/// Handle the `post` command.
pub async fn handle_post(config: &LinkpostConfig, content: &str) -> LinkpostResult<bool> {
    let pipeline = build_pipeline(config)?;
    let content = pipeline.prepare(content);
    if content.is_empty() {
        eprintln!("Nothing to post: content is empty");
        return Ok(false);
    }

    let outcome = pipeline.publish(&content).await;
    print_json(&outcome)?;
    Ok(outcome.is_success())
}

/// Handle the `run-once` command.
pub async fn handle_run_once(config: &LinkpostConfig) -> LinkpostResult<bool> {
    let pipeline = build_pipeline(config)?;
    match pipeline.run_cycle().await {
        Some(outcome) => {
            print_json(&outcome)?;
            Ok(outcome.is_success())
        }
        None => {
            eprintln!("Content generation failed");
            Ok(false)
        }
    }
}

/// Handle the `analytics` command.
pub async fn handle_analytics(config: &LinkpostConfig) -> LinkpostResult<bool> {
    let pipeline = build_pipeline(config)?;
    let publisher = pipeline.publisher();
    match collect_analytics(publisher.history(), publisher.platform().as_ref()).await? {
        Some(report) => {
            print_json(&report)?;
            Ok(true)
        }
        None => {
            eprintln!("No posts found");
            Ok(false)
        }
    }
}
