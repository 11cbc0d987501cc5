use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store failure, propagated to callers as-is (no retry, no suppression).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with that id exists for the acting owner.
    #[error("record not found")]
    NotFound,

    /// A write collided with an existing row (duplicate id / unique key).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Anything else the backend reports (connection, permission, corrupt row).
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
