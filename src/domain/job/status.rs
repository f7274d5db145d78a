//! Job identity and status

use std::collections::HashMap;
use std::fmt;

/// Opaque identifier for a server-side processing job
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    /// Wrap a raw identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Snapshot of a job as reported by one status check.
/// Each poll replaces the previous snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Still running; the service echoes the uploaded filename
    Processing { filename: Option<String> },
    /// Finished; `files` maps artifact keys to downloadable filenames
    Completed { files: HashMap<String, String> },
    /// Aborted server-side; detail is present only when the service provides one
    Failed { error: Option<String> },
}

impl JobStatus {
    /// Whether polling should stop at this status
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Processing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_id_display() {
        let id = JobId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn processing_is_not_terminal() {
        let status = JobStatus::Processing {
            filename: Some("episode1.mp3".to_string()),
        };
        assert!(!status.is_terminal());
    }

    #[test]
    fn completed_and_failed_are_terminal() {
        assert!(JobStatus::Completed {
            files: HashMap::new()
        }
        .is_terminal());
        assert!(JobStatus::Failed { error: None }.is_terminal());
    }
}
