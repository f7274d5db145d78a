//! HTTP job service adapter

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

use crate::application::ports::{JobApiError, JobService};
use crate::domain::job::{JobId, JobStatus};
use crate::domain::upload::UploadRequest;

/// Upload endpoint path
const UPLOAD_PATH: &str = "/api/upload";

/// Status endpoint path prefix
const STATUS_PATH: &str = "/api/status";

/// Download endpoint path prefix
const DOWNLOAD_PATH: &str = "/api/download";

// Response types for the processing service

#[derive(Debug, Deserialize)]
struct UploadResponse {
    job_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    filename: Option<String>,
    files: Option<HashMap<String, String>>,
    error: Option<String>,
}

/// Job service client over the service's HTTP API
pub struct HttpJobService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpJobService {
    /// Create a new client for the given service base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the upload URL
    fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// Build the status URL for a job
    fn status_url(&self, job_id: &JobId) -> String {
        format!("{}{}/{}", self.base_url, STATUS_PATH, job_id)
    }

    /// Build the download URL for an artifact
    fn download_url(&self, filename: &str) -> String {
        format!("{}{}/{}", self.base_url, DOWNLOAD_PATH, filename)
    }

    /// Build the multipart form: file bytes under `file`, one repeated
    /// `content_types` field per selected kind
    fn build_form(request: UploadRequest) -> reqwest::multipart::Form {
        let (file, content_types) = request.into_parts();
        let filename = file.name().to_string();

        let mut form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(file.into_data()).file_name(filename),
        );
        for content_type in content_types {
            form = form.text("content_types", content_type.as_str());
        }
        form
    }

    /// Map a status response body onto the domain status
    fn parse_status(response: StatusResponse) -> Result<JobStatus, JobApiError> {
        match response.status.as_str() {
            "processing" => Ok(JobStatus::Processing {
                filename: response.filename,
            }),
            "completed" => Ok(JobStatus::Completed {
                files: response.files.unwrap_or_default(),
            }),
            "failed" => Ok(JobStatus::Failed {
                error: response.error,
            }),
            other => Err(JobApiError::ParseError(format!(
                "unknown job status \"{}\"",
                other
            ))),
        }
    }
}

#[async_trait]
impl JobService for HttpJobService {
    async fn submit(&self, request: UploadRequest) -> Result<JobId, JobApiError> {
        let form = Self::build_form(request);

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| JobApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            // The service explains rejections in an `error` field when it can
            return match response.json::<ErrorResponse>().await {
                Ok(ErrorResponse { error: Some(message) }) => {
                    Err(JobApiError::Rejected(message))
                }
                _ => Err(JobApiError::UploadFailed),
            };
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| JobApiError::ParseError(e.to_string()))?;

        match body.job_id {
            Some(job_id) if !job_id.is_empty() => Ok(JobId::new(job_id)),
            _ => Err(JobApiError::ParseError(
                "response is missing job_id".to_string(),
            )),
        }
    }

    async fn status(&self, job_id: &JobId) -> Result<JobStatus, JobApiError> {
        let response = self
            .client
            .get(self.status_url(job_id))
            .send()
            .await
            .map_err(|e| JobApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JobApiError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| JobApiError::ParseError(e.to_string()))?;

        Self::parse_status(body)
    }

    async fn download(&self, filename: &str) -> Result<Vec<u8>, JobApiError> {
        let response = self
            .client
            .get(self.download_url(filename))
            .send()
            .await
            .map_err(|e| JobApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JobApiError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| JobApiError::RequestFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_rooted_at_base() {
        let service = HttpJobService::new("http://localhost:8000");
        assert_eq!(service.upload_url(), "http://localhost:8000/api/upload");
        assert_eq!(
            service.status_url(&JobId::new("abc")),
            "http://localhost:8000/api/status/abc"
        );
        assert_eq!(
            service.download_url("abc_blog.md"),
            "http://localhost:8000/api/download/abc_blog.md"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_trimmed() {
        let service = HttpJobService::new("http://localhost:8000/");
        assert_eq!(service.upload_url(), "http://localhost:8000/api/upload");
    }

    #[test]
    fn parse_status_processing() {
        let status = HttpJobService::parse_status(StatusResponse {
            status: "processing".to_string(),
            filename: Some("episode1.mp3".to_string()),
            files: None,
            error: None,
        })
        .unwrap();

        assert_eq!(
            status,
            JobStatus::Processing {
                filename: Some("episode1.mp3".to_string())
            }
        );
    }

    #[test]
    fn parse_status_completed_without_files_yields_empty_map() {
        let status = HttpJobService::parse_status(StatusResponse {
            status: "completed".to_string(),
            filename: None,
            files: None,
            error: None,
        })
        .unwrap();

        assert_eq!(
            status,
            JobStatus::Completed {
                files: HashMap::new()
            }
        );
    }

    #[test]
    fn parse_status_failed_keeps_missing_detail() {
        let status = HttpJobService::parse_status(StatusResponse {
            status: "failed".to_string(),
            filename: None,
            files: None,
            error: None,
        })
        .unwrap();

        assert_eq!(status, JobStatus::Failed { error: None });
    }

    #[test]
    fn parse_status_unknown_is_an_error() {
        let err = HttpJobService::parse_status(StatusResponse {
            status: "queued".to_string(),
            filename: None,
            files: None,
            error: None,
        })
        .unwrap_err();

        assert!(err.to_string().contains("queued"));
    }
}
