//! One forecast fetch cycle: resolve a coordinate to its forecast endpoints,
//! fetch the daily and hourly payloads, and persist both period lists as CSV.

mod api;
mod error;
mod writer;

pub use api::{ForecastResponse, Measurement, Period, PointsResponse};
pub use error::SyncError;
pub use writer::{write_daily_csv, write_hourly_csv, DAILY_HEADERS, HOURLY_HEADERS};

use crate::client::LatLon;
use log::{info, warn};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tokio::sync::oneshot;

/// Base URL of the NWS point-metadata endpoint.
pub const POINTS_URL: &str = "https://api.weather.gov/points";

/// Drives one fetch-and-persist cycle for a geographic coordinate.
///
/// The cycle is strictly sequential: points lookup, daily fetch, daily write,
/// hourly fetch, hourly write. There is no partial success; the first failing
/// step fails the sync as a whole, even when the daily file was already
/// written (no rollback is attempted).
pub struct ForecastSync {
    http: reqwest::Client,
    points_base: String,
    daily_csv_path: PathBuf,
    hourly_csv_path: PathBuf,
}

/// What a successful sync reports back: a confirmation message and the
/// generation timestamps of the two fetched forecasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub message: String,
    pub daily_generated_at: String,
    pub hourly_generated_at: String,
}

impl ForecastSync {
    /// Creates a sync cycle writing to the given CSV destinations.
    pub fn new(
        http: reqwest::Client,
        daily_csv_path: impl Into<PathBuf>,
        hourly_csv_path: impl Into<PathBuf>,
    ) -> Self {
        ForecastSync {
            http,
            points_base: POINTS_URL.to_string(),
            daily_csv_path: daily_csv_path.into(),
            hourly_csv_path: hourly_csv_path.into(),
        }
    }

    #[cfg(test)]
    fn set_points_base(&mut self, base: impl Into<String>) {
        self.points_base = base.into();
    }

    /// Runs the cycle to completion on the current task.
    ///
    /// Coordinates are rounded to 4 decimal places, the maximum precision the
    /// points endpoint accepts.
    ///
    /// # Errors
    ///
    /// Returns the first [`SyncError`] encountered: a transport failure, an
    /// upstream payload missing the expected structure, or a failure writing
    /// a destination file.
    pub async fn run(&self, coordinate: LatLon) -> Result<SyncOutcome, SyncError> {
        let points_url = format!("{}/{:.4},{:.4}", self.points_base, coordinate.0, coordinate.1);
        let points: PointsResponse = self.fetch_json(&points_url).await?;

        let daily: ForecastResponse = self.fetch_json(&points.properties.forecast).await?;
        let daily_generated_at = daily.properties.generated_at_or_now();
        write_daily_csv(&self.daily_csv_path, &daily.properties.periods)?;
        info!(
            "Wrote {} daily periods to {}",
            daily.properties.periods.len(),
            self.daily_csv_path.display()
        );

        let hourly: ForecastResponse = self.fetch_json(&points.properties.forecast_hourly).await?;
        let hourly_generated_at = hourly.properties.generated_at_or_now();
        write_hourly_csv(&self.hourly_csv_path, &hourly.properties.periods)?;
        info!(
            "Wrote {} hourly periods to {}",
            hourly.properties.periods.len(),
            self.hourly_csv_path.display()
        );

        Ok(SyncOutcome {
            message: "Forecast CSV files written".to_string(),
            daily_generated_at,
            hourly_generated_at,
        })
    }

    /// Runs the cycle on a background task so a slow fetch cannot block the
    /// caller.
    ///
    /// The returned receiver resolves exactly once with the completion event;
    /// there is no cancellation once the task has started. Dropping the
    /// receiver lets the cycle run to completion unobserved.
    pub fn spawn(self, coordinate: LatLon) -> oneshot::Receiver<Result<SyncOutcome, SyncError>> {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = self.run(coordinate).await;
            if let Err(e) = &result {
                warn!("Forecast sync failed: {e}");
            }
            let _ = tx.send(result);
        });
        rx
    }

    /// Fetches a URL and decodes its JSON body, mapping each failure mode to
    /// its [`SyncError`] category.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SyncError> {
        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| SyncError::Network(url.to_string(), e))?;

        let response = response.error_for_status().map_err(|e| {
            if let Some(status) = e.status() {
                SyncError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                }
            } else {
                SyncError::Network(url.to_string(), e)
            }
        })?;

        let body = response
            .bytes()
            .await
            .map_err(|e| SyncError::Network(url.to_string(), e))?;
        serde_json::from_slice(&body).map_err(|e| SyncError::ResponseShape(url.to_string(), e))
    }
}
