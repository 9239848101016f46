//! Errors from talking to remote resources.
//!
//! None of these ever reach the user: the loader turns them into an empty
//! dataset and enrichment turns them into a placeholder image.

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}
