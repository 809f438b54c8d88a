use thiserror::Error;

/// Failures loading the record collection. The one fallible boundary in the
/// core; everything downstream of a loaded collection is total.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate request id: {0}")]
    DuplicateRequestId(String),
}
