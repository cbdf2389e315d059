use std::path::PathBuf;
use thiserror::Error;

/// Why a sync cycle failed. The variants are mutually exclusive categories:
/// transport, response shape, and persistence, decided first-match-wins as
/// the cycle proceeds.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Network request failed for {0}")]
    Network(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response shape from {0}")]
    ResponseShape(String, #[source] serde_json::Error),

    #[error("Failed to write forecast file '{0}'")]
    CsvWrite(PathBuf, #[source] csv::Error),
}
