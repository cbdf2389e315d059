//! The main entry point for the crate: a configured NWS client that hands out
//! sync cycles and record stores sharing one data folder.

use crate::error::NwsForecastError;
use crate::stores::{DailyForecastStore, HourlyForecastStore};
use crate::sync::{ForecastSync, SyncError, SyncOutcome};
use crate::utils::{ensure_data_dir_exists, get_data_dir};
use bon::bon;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::oneshot;

/// A geographical coordinate: latitude first, longitude second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Name of the daily forecast file inside the data folder.
pub const DAILY_CSV_FILENAME: &str = "daily_forecast_data.csv";
/// Name of the hourly forecast file inside the data folder.
pub const HOURLY_CSV_FILENAME: &str = "hourly_forecast_data.csv";

/// The NWS API rejects requests without a User-Agent.
const DEFAULT_USER_AGENT: &str = concat!("nws-forecast/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A configured client for fetching, persisting and reloading NWS point
/// forecasts.
///
/// Holds the shared HTTP client and the data folder the two forecast CSV
/// files live in. Create one with [`NwsForecast::new`] (default data folder)
/// or through the [`NwsForecast::create`] builder.
///
/// # Examples
///
/// ```no_run
/// # use nws_forecast::{LatLon, NwsForecast, NwsForecastError};
/// # async fn run() -> Result<(), NwsForecastError> {
/// let client = NwsForecast::new().await?;
/// let outcome = client.sync().run(LatLon(40.7128, -74.0060)).await?;
///
/// let mut store = client.daily_store(outcome.daily_generated_at.clone());
/// store.load()?;
/// for forecast in store.forecasts() {
///     println!("{}: {}", forecast.period_name, forecast.temperature_fahrenheit);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NwsForecast {
    http: reqwest::Client,
    data_folder: PathBuf,
}

#[bon]
impl NwsForecast {
    /// Builder-style constructor.
    ///
    /// All settings are optional: `data_folder` defaults to the
    /// `dirs`-resolved per-user data directory, `user_agent` to
    /// `nws-forecast/<version>` and `timeout` to 10 seconds. The data folder
    /// is created when missing.
    ///
    /// # Errors
    ///
    /// Returns [`NwsForecastError::DataDirResolution`] when no default data
    /// directory can be determined, [`NwsForecastError::DataDirCreation`]
    /// when the folder cannot be created, and
    /// [`NwsForecastError::HttpClient`] when the HTTP client fails to build.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use nws_forecast::{NwsForecast, NwsForecastError};
    /// # use std::path::PathBuf;
    /// # async fn run() -> Result<(), NwsForecastError> {
    /// let client = NwsForecast::create()
    ///     .data_folder(PathBuf::from("/tmp/forecasts"))
    ///     .user_agent("my-weather-app/1.0 (me@example.com)".to_string())
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn create(
        data_folder: Option<PathBuf>,
        user_agent: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, NwsForecastError> {
        let data_folder = match data_folder {
            Some(folder) => folder,
            None => get_data_dir().map_err(NwsForecastError::DataDirResolution)?,
        };
        ensure_data_dir_exists(&data_folder)
            .await
            .map_err(|e| NwsForecastError::DataDirCreation(data_folder.clone(), e))?;

        let http = reqwest::Client::builder()
            .user_agent(user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()))
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(NwsForecastError::HttpClient)?;

        Ok(NwsForecast { http, data_folder })
    }

    /// Creates a client with all defaults.
    pub async fn new() -> Result<Self, NwsForecastError> {
        Self::create().call().await
    }

    /// A sync cycle targeting this client's CSV files.
    pub fn sync(&self) -> ForecastSync {
        ForecastSync::new(
            self.http.clone(),
            self.daily_csv_path(),
            self.hourly_csv_path(),
        )
    }

    /// Starts a sync on a background task and returns its completion channel.
    pub fn spawn_sync(
        &self,
        coordinate: LatLon,
    ) -> oneshot::Receiver<Result<SyncOutcome, SyncError>> {
        self.sync().spawn(coordinate)
    }

    /// An unloaded store for the daily forecast file.
    pub fn daily_store(&self, generated_time: impl Into<String>) -> DailyForecastStore {
        DailyForecastStore::new(self.daily_csv_path(), generated_time)
    }

    /// An unloaded store for the hourly forecast file.
    pub fn hourly_store(&self, generated_time: impl Into<String>) -> HourlyForecastStore {
        HourlyForecastStore::new(self.hourly_csv_path(), generated_time)
    }

    pub fn daily_csv_path(&self) -> PathBuf {
        self.data_folder.join(DAILY_CSV_FILENAME)
    }

    pub fn hourly_csv_path(&self) -> PathBuf {
        self.data_folder.join(HOURLY_CSV_FILENAME)
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builder_creates_the_data_folder() -> Result<(), NwsForecastError> {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("forecasts");

        let client = NwsForecast::create()
            .data_folder(folder.clone())
            .call()
            .await?;

        assert!(folder.is_dir());
        assert_eq!(client.data_folder(), folder);
        assert_eq!(client.daily_csv_path(), folder.join(DAILY_CSV_FILENAME));
        assert_eq!(client.hourly_csv_path(), folder.join(HOURLY_CSV_FILENAME));
        Ok(())
    }

    #[tokio::test]
    async fn stores_point_at_the_client_paths() -> Result<(), NwsForecastError> {
        let dir = tempfile::tempdir().unwrap();
        let client = NwsForecast::create()
            .data_folder(dir.path().to_path_buf())
            .call()
            .await?;

        let daily = client.daily_store("2025-04-28T05:30:00+00:00");
        let hourly = client.hourly_store("2025-04-28T05:30:00+00:00");

        assert_eq!(daily.csv_path(), client.daily_csv_path());
        assert_eq!(hourly.csv_path(), client.hourly_csv_path());
        assert_eq!(daily.generated_time(), "2025-04-28T05:30:00+00:00");
        Ok(())
    }

    #[tokio::test]
    async fn rejects_a_file_as_data_folder() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("occupied");
        tokio::fs::write(&file, "x").await.unwrap();

        let err = NwsForecast::create()
            .data_folder(file)
            .call()
            .await
            .unwrap_err();
        assert!(matches!(err, NwsForecastError::DataDirCreation(..)));
    }
}
