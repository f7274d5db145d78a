//! Upload session use case
//!
//! Drives one job through the session phase machine: validation gate, submission,
//! watch task, and the terminal transition into results or error. Holds at most
//! one watch handle, so there is never more than one active poll loop.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::job::{artifact, DisplayItem, JobId};
use crate::domain::session::{InvalidPhaseTransition, Phase, Session};
use crate::domain::upload::{validate, AudioFile, ContentType, UploadRequest};
use crate::domain::ValidationError;

use super::ports::{JobApiError, JobService};
use super::watch::{
    JobOutcome, JobWatcher, PollPolicy, WatchCallbacks, WatchHandle, TIMEOUT_MESSAGE,
};

/// Errors from the upload session use case
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Upload failed: {0}")]
    Submission(#[from] JobApiError),

    #[error(transparent)]
    Phase(#[from] InvalidPhaseTransition),
}

/// Terminal presentation of a watched job.
/// Failure and timeout converge on a single message string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Ordered, labeled artifact listing
    Completed(Vec<DisplayItem>),
    /// Free-text error message for display
    Failed(String),
}

/// Upload session controller
pub struct UploadSession<S>
where
    S: JobService + 'static,
{
    service: Arc<S>,
    watcher: JobWatcher<S>,
    session: Session,
    job_id: Option<JobId>,
    watch: Option<WatchHandle>,
}

impl<S> UploadSession<S>
where
    S: JobService + 'static,
{
    /// Create a session with the default polling policy
    pub fn new(service: Arc<S>) -> Self {
        Self::with_policy(service, PollPolicy::default())
    }

    /// Create a session with a custom polling policy
    pub fn with_policy(service: Arc<S>, policy: PollPolicy) -> Self {
        let watcher = JobWatcher::with_policy(Arc::clone(&service), policy);
        Self {
            service,
            watcher,
            session: Session::new(),
            job_id: None,
            watch: None,
        }
    }

    /// Get the current session phase
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Get the active job identifier, if a job is in flight
    pub fn job_id(&self) -> Option<&JobId> {
        self.job_id.as_ref()
    }

    /// Validate and submit an upload, then start watching the created job.
    ///
    /// On validation or submission failure the session moves to the error phase
    /// without any job state held.
    pub async fn submit(
        &mut self,
        file: Option<AudioFile>,
        content_types: Vec<ContentType>,
        callbacks: WatchCallbacks,
    ) -> Result<JobId, SessionError> {
        if !self.session.is_upload() {
            return Err(InvalidPhaseTransition {
                current_phase: self.session.phase(),
                action: "submit".to_string(),
            }
            .into());
        }

        let request = match build_request(file, content_types) {
            Ok(request) => request,
            Err(reason) => {
                self.session.fail()?;
                return Err(reason.into());
            }
        };

        match self.service.submit(request).await {
            Ok(job_id) => {
                self.session.begin_processing()?;
                self.job_id = Some(job_id.clone());
                self.watch = Some(self.watcher.spawn(job_id.clone(), callbacks));
                Ok(job_id)
            }
            Err(reason) => {
                self.session.fail()?;
                Err(reason.into())
            }
        }
    }

    /// Wait for the watched job to reach a terminal outcome and transition the
    /// session accordingly. The held job identifier is discarded either way.
    pub async fn wait(&mut self) -> Result<SessionOutcome, SessionError> {
        let Some(watch) = self.watch.take() else {
            return Err(InvalidPhaseTransition {
                current_phase: self.session.phase(),
                action: "wait for a job".to_string(),
            }
            .into());
        };

        let outcome = watch.join().await;
        self.job_id = None;

        match outcome {
            Some(JobOutcome::Completed(files)) => {
                self.session.complete()?;
                Ok(SessionOutcome::Completed(artifact::render(&files)))
            }
            Some(JobOutcome::Failed(message)) => {
                self.session.fail()?;
                Ok(SessionOutcome::Failed(message))
            }
            Some(JobOutcome::TimedOut) => {
                self.session.fail()?;
                Ok(SessionOutcome::Failed(TIMEOUT_MESSAGE.to_string()))
            }
            None => {
                self.session.fail()?;
                Ok(SessionOutcome::Failed("Processing was cancelled".to_string()))
            }
        }
    }

    /// Abandon an in-flight job: stop the poll loop (waiting for it to
    /// terminate) and move the session to the error phase.
    pub async fn cancel(&mut self) -> Result<(), SessionError> {
        if let Some(watch) = self.watch.take() {
            watch.cancel().await;
        }
        self.job_id = None;
        if self.session.is_processing() {
            self.session.fail()?;
        }
        Ok(())
    }

    /// Reset from results or error back to a fresh upload phase.
    /// Any outstanding watch task is cancelled before the phase changes.
    pub async fn start_over(&mut self) -> Result<(), SessionError> {
        if let Some(watch) = self.watch.take() {
            watch.cancel().await;
        }
        self.job_id = None;
        self.session.start_over()?;
        Ok(())
    }
}

fn build_request(
    file: Option<AudioFile>,
    content_types: Vec<ContentType>,
) -> Result<UploadRequest, ValidationError> {
    validate(file.as_ref(), &content_types)?;
    let file = file.ok_or(ValidationError::NoFileSelected)?;
    UploadRequest::new(file, content_types)
}
