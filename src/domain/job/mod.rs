//! Job tracking: identity, status snapshots, and result artifacts

pub mod artifact;
pub mod status;

pub use artifact::{render, ArtifactKind, DisplayItem};
pub use status::{JobId, JobStatus};
