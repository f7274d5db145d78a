//! Session phase state machine

use std::fmt;
use thiserror::Error;

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Upload,
    Processing,
    Results,
    Error,
}

impl Phase {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Processing => "processing",
            Self::Results => "results",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid phase transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid phase transition: cannot {action} while in {current_phase} phase")]
pub struct InvalidPhaseTransition {
    pub current_phase: Phase,
    pub action: String,
}

/// Session entity.
/// Exactly one phase is active at a time; transitions are explicit.
///
/// State machine:
///   UPLOAD -> PROCESSING (begin_processing)
///   PROCESSING -> RESULTS (complete)
///   UPLOAD -> ERROR (fail, before a job exists)
///   PROCESSING -> ERROR (fail)
///   RESULTS -> UPLOAD (start_over)
///   ERROR -> UPLOAD (start_over)
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
}

impl Session {
    /// Create a new session in the upload phase
    pub fn new() -> Self {
        Self {
            phase: Phase::Upload,
        }
    }

    /// Get the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if waiting for input
    pub fn is_upload(&self) -> bool {
        self.phase == Phase::Upload
    }

    /// Check if a job is in flight
    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Processing
    }

    /// Check if results are being shown
    pub fn is_results(&self) -> bool {
        self.phase == Phase::Results
    }

    /// Check if an error is being shown
    pub fn is_error(&self) -> bool {
        self.phase == Phase::Error
    }

    /// Transition from UPLOAD to PROCESSING
    pub fn begin_processing(&mut self) -> Result<(), InvalidPhaseTransition> {
        if self.phase != Phase::Upload {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "begin processing".to_string(),
            });
        }
        self.phase = Phase::Processing;
        Ok(())
    }

    /// Transition from PROCESSING to RESULTS
    pub fn complete(&mut self) -> Result<(), InvalidPhaseTransition> {
        if self.phase != Phase::Processing {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "complete".to_string(),
            });
        }
        self.phase = Phase::Results;
        Ok(())
    }

    /// Transition from UPLOAD or PROCESSING to ERROR
    pub fn fail(&mut self) -> Result<(), InvalidPhaseTransition> {
        if self.phase != Phase::Upload && self.phase != Phase::Processing {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "fail".to_string(),
            });
        }
        self.phase = Phase::Error;
        Ok(())
    }

    /// Transition from RESULTS or ERROR back to UPLOAD
    pub fn start_over(&mut self) -> Result<(), InvalidPhaseTransition> {
        if self.phase != Phase::Results && self.phase != Phase::Error {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "start over".to_string(),
            });
        }
        self.phase = Phase::Upload;
        Ok(())
    }
}
