//! Job service port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::job::{JobId, JobStatus};
use crate::domain::upload::UploadRequest;

/// Errors from the processing service boundary
#[derive(Debug, Clone, Error)]
pub enum JobApiError {
    /// The request never produced a usable HTTP response
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// The service refused the upload and said why
    #[error("{0}")]
    Rejected(String),

    /// The service refused the upload without a readable reason
    #[error("Error uploading file")]
    UploadFailed,

    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// Port for the remote processing service
#[async_trait]
pub trait JobService: Send + Sync {
    /// Submit an upload and start a processing job.
    ///
    /// Consumes the request; exactly one network request per invocation,
    /// no retries at this layer.
    ///
    /// # Returns
    /// The identifier of the created job
    async fn submit(&self, request: UploadRequest) -> Result<JobId, JobApiError>;

    /// Fetch the current status of a job.
    async fn status(&self, job_id: &JobId) -> Result<JobStatus, JobApiError>;

    /// Download one generated artifact by filename.
    async fn download(&self, filename: &str) -> Result<Vec<u8>, JobApiError>;
}

/// Blanket implementation for boxed service types
#[async_trait]
impl JobService for Box<dyn JobService> {
    async fn submit(&self, request: UploadRequest) -> Result<JobId, JobApiError> {
        self.as_ref().submit(request).await
    }

    async fn status(&self, job_id: &JobId) -> Result<JobStatus, JobApiError> {
        self.as_ref().status(job_id).await
    }

    async fn download(&self, filename: &str) -> Result<Vec<u8>, JobApiError> {
        self.as_ref().download(filename).await
    }
}
