// envelope-client/src/error.rs
use thiserror::Error;

/// Application-level rejection: the backend answered, but its inner status
/// was neither success nor an authentication rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("backend rejected request (status {status}): {message}")]
pub struct ApiError {
    pub status: i64,
    pub message: String,
}
