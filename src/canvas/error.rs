//! Error types for the platform API layer.

use crate::api::{CourseId, GroupId};

/// Result type for API client operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Failures talking to the platform API. All are terminal for the run.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("invalid API token")]
    InvalidToken,
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Fatal validation failures in the ordered upload walk.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Resolver output never contains a template; seeing one here means
    /// the input bypassed resolution.
    #[error("upload found an unresolved template assignment")]
    TemplateInUpload,
    #[error("unable to determine assignment group ID for assignment {name:?}")]
    NoGroupId { name: String },
    #[error("assignment group ID mismatch for {name:?}: expected {expected} but found {found}")]
    GroupIdMismatch {
        name: String,
        expected: GroupId,
        found: GroupId,
    },
    #[error("course ID mismatch for assignment {name:?}: expected {expected} but found {found}")]
    CourseIdMismatch {
        name: String,
        expected: CourseId,
        found: CourseId,
    },
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("failed to encode upload plan: {0}")]
    Encode(#[from] serde_json::Error),
}
