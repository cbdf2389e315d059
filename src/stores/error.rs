use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open forecast file '{0}'")]
    Open(PathBuf, #[source] csv::Error),

    #[error("Failed to read forecast file '{0}'")]
    Read(PathBuf, #[source] csv::Error),

    #[error("No timestamp column ('timestamp' or 'start_time') in '{0}'")]
    MissingTimestampColumn(PathBuf),
}
