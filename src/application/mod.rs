//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod session;
pub mod watch;

// Re-export use cases
pub use session::{SessionError, SessionOutcome, UploadSession};
pub use watch::{
    JobOutcome, JobWatcher, PollPolicy, WatchCallbacks, WatchHandle, DEFAULT_FAILURE_MESSAGE,
    DEFAULT_MAX_FAILURES, DEFAULT_POLL_INTERVAL, TIMEOUT_MESSAGE,
};
