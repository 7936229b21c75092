use thiserror::Error;

/// Failures from the session token store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no browser window available")]
    NoWindow,
    #[error("localStorage is disabled or unavailable")]
    StorageUnavailable,
    #[error("localStorage access failed: {0}")]
    Storage(String),
}
