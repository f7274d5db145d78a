//! Job watch use case
//!
//! Polls a job's status on a fixed interval until the service reports a terminal
//! state or the consecutive-failure budget runs out. The poll loop lives in a
//! spawned task owned by a [`WatchHandle`]; cancelling (or dropping) the handle
//! stops the loop, so a discarded job can never leak a ticking poller.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::job::{JobId, JobStatus};

use super::ports::JobService;

/// Seconds between status checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Consecutive failed checks tolerated before giving up
pub const DEFAULT_MAX_FAILURES: u32 = 60;

/// Message shown when the service reports failure without detail
pub const DEFAULT_FAILURE_MESSAGE: &str = "Processing failed";

/// Message shown when the failure budget is exhausted
pub const TIMEOUT_MESSAGE: &str = "Processing timed out. Please try again.";

/// Polling cadence and give-up budget.
///
/// The budget counts *consecutive* failed status checks; any successful response
/// resets it. A job that keeps reporting `processing` over a healthy connection
/// is polled indefinitely — job deadlines belong to the service, the client only
/// gives up on connectivity.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_failures: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_failures: DEFAULT_MAX_FAILURES,
        }
    }
}

/// Terminal result of a watch task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Job finished; artifact key to filename mapping
    Completed(HashMap<String, String>),
    /// Service reported failure; message is the service detail or a generic default
    Failed(String),
    /// The consecutive-failure budget was exhausted
    TimedOut,
}

/// Progress callbacks for a watch task
#[derive(Default)]
pub struct WatchCallbacks {
    /// Called on every `processing` response with the echoed filename
    pub on_update: Option<Box<dyn Fn(Option<&str>) + Send + Sync>>,
}

/// Spawns watch tasks against a job service
pub struct JobWatcher<S>
where
    S: JobService + 'static,
{
    service: Arc<S>,
    policy: PollPolicy,
}

impl<S> JobWatcher<S>
where
    S: JobService + 'static,
{
    /// Create a watcher with the default polling policy
    pub fn new(service: Arc<S>) -> Self {
        Self::with_policy(service, PollPolicy::default())
    }

    /// Create a watcher with a custom polling policy
    pub fn with_policy(service: Arc<S>, policy: PollPolicy) -> Self {
        Self { service, policy }
    }

    /// Start watching a job. The first status check is issued immediately.
    pub fn spawn(&self, job_id: JobId, callbacks: WatchCallbacks) -> WatchHandle {
        let service = Arc::clone(&self.service);
        let policy = self.policy;
        let task = tokio::spawn(watch_loop(service, job_id, policy, callbacks));
        WatchHandle { task: Some(task) }
    }
}

/// One status check per tick; the next sleep starts only after the in-flight
/// request resolves, so responses are processed in request order.
async fn watch_loop<S: JobService>(
    service: Arc<S>,
    job_id: JobId,
    policy: PollPolicy,
    callbacks: WatchCallbacks,
) -> JobOutcome {
    let mut failures: u32 = 0;

    loop {
        match service.status(&job_id).await {
            Ok(JobStatus::Processing { filename }) => {
                failures = 0;
                if let Some(ref on_update) = callbacks.on_update {
                    on_update(filename.as_deref());
                }
            }
            Ok(JobStatus::Completed { files }) => {
                return JobOutcome::Completed(files);
            }
            Ok(JobStatus::Failed { error }) => {
                let message = error
                    .filter(|detail| !detail.is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                return JobOutcome::Failed(message);
            }
            Err(_) => {
                // Transient; swallowed unless the budget runs out
                failures += 1;
                if failures >= policy.max_failures {
                    return JobOutcome::TimedOut;
                }
            }
        }

        tokio::time::sleep(policy.interval).await;
    }
}

/// Owning handle to a spawned watch task.
///
/// Dropping the handle aborts the task. `cancel` additionally waits for the task
/// to terminate, so no callback can fire after it returns.
pub struct WatchHandle {
    task: Option<JoinHandle<JobOutcome>>,
}

impl WatchHandle {
    /// Wait for the watch task to reach a terminal outcome.
    ///
    /// Returns None if the task was aborted before resolving.
    pub async fn join(mut self) -> Option<JobOutcome> {
        let task = self.task.take()?;
        task.await.ok()
    }

    /// Stop the watch task and wait for it to terminate.
    pub async fn cancel(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }

    /// Whether the watch task has already resolved
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        if let Some(ref task) = self.task {
            task.abort();
        }
    }
}
