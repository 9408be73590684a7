//! Fixed-interval posting scheduler.

use crate::PostingPipeline;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, error, info, instrument};

/// `interval_at` panics on a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Message types for the scheduler task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerMessage {
    /// Run a cycle now, outside the timer
    RunNow,
    /// Stop the scheduler
    Shutdown,
}

/// Runs one [`PostingPipeline`] cycle per interval.
pub struct PostingScheduler {
    pipeline: Arc<PostingPipeline>,
    period: Duration,
    rx: mpsc::Receiver<SchedulerMessage>,
}

impl PostingScheduler {
    /// Start the scheduler on the current tokio runtime.
    ///
    /// The first cycle runs one `period` after start. Cycles run inline, so
    /// a slow cycle delays the next tick instead of overlapping it.
    pub fn spawn(pipeline: Arc<PostingPipeline>, period: Duration) -> SchedulerHandle {
        let (tx, rx) = mpsc::channel(8);
        let scheduler = Self {
            pipeline,
            period: period.max(MIN_INTERVAL),
            rx,
        };
        let task = tokio::spawn(scheduler.run());
        SchedulerHandle { tx, task }
    }

    #[instrument(skip(self), fields(period_secs = self.period.as_secs_f64()))]
    async fn run(mut self) {
        info!("Posting scheduler started");

        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    debug!("Scheduled cycle");
                    self.pipeline.run_cycle().await;
                }
                msg = self.rx.recv() => match msg {
                    Some(SchedulerMessage::RunNow) => {
                        debug!("Triggered cycle");
                        self.pipeline.run_cycle().await;
                    }
                    Some(SchedulerMessage::Shutdown) | None => {
                        info!("Posting scheduler shutting down");
                        break;
                    }
                },
            }
        }
    }
}

/// Owner's handle on a running [`PostingScheduler`].
#[derive(Debug)]
pub struct SchedulerHandle {
    tx: mpsc::Sender<SchedulerMessage>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Ask for an extra cycle. Returns `false` if the scheduler has stopped.
    pub async fn trigger(&self) -> bool {
        self.tx.send(SchedulerMessage::RunNow).await.is_ok()
    }

    /// Stop the scheduler and wait for it to finish.
    ///
    /// A cycle already in progress completes first.
    pub async fn stop(self) {
        if self.tx.send(SchedulerMessage::Shutdown).await.is_err() {
            debug!("Scheduler already stopped");
        }
        if let Err(e) = self.task.await {
            error!(error = %e, "Scheduler task failed");
        }
    }
}
