//! `serve` command handler.

use linkpost::{AppState, LinkpostConfig, LinkpostResult, PostingScheduler, build_pipeline, create_router};
use tracing::{error, info, instrument};

/// Handle the `serve` command.
///
/// Runs until Ctrl+C, then stops the scheduler and lets in-flight requests
/// finish.
#[instrument(skip(config))]
pub async fn handle_serve(
    config: &LinkpostConfig,
    bind: Option<String>,
    no_scheduler: bool,
) -> LinkpostResult<()> {
    let pipeline = build_pipeline(config)?;

    let scheduler = if no_scheduler {
        info!("Scheduled posting disabled");
        None
    } else {
        info!(interval_secs = config.post_interval().as_secs(), "Starting posting scheduler");
        Some(PostingScheduler::spawn(pipeline.clone(), *config.post_interval()))
    };

    let address = bind.unwrap_or_else(|| config.bind_address().clone());
    let router = create_router(AppState::new(pipeline));

    info!("linkpost running. Press Ctrl+C to stop.");
    let served = linkpost::serve(&address, router, shutdown_signal()).await;

    if let Some(scheduler) = scheduler {
        scheduler.stop().await;
    }

    served?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
