use crate::stores::StoreError;
use crate::sync::SyncError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NwsForecastError {
    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to determine data directory")]
    DataDirResolution(#[source] std::io::Error),

    #[error("Failed to create data directory '{0}'")]
    DataDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
