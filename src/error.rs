use thiserror::Error;

/// Failures of the best-effort browser glue. None of these reach the user;
/// callers log them and keep rendering with the default visual state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
