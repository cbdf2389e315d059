//! Owns the collection of hourly forecast records loaded from one CSV file.

use crate::records::HourlyForecast;
use crate::stores::{row_fields, StoreError};
use log::warn;
use std::fmt;
use std::path::{Path, PathBuf};

/// Loads and holds [`HourlyForecast`] records from a persisted CSV source.
///
/// The source header may name the period start either `timestamp` or
/// `start_time`; the store detects which one is present before reading rows.
/// Record construction is strict, so individual rows can fail; failing rows
/// are logged and skipped, and the load as a whole still succeeds.
#[derive(Debug)]
pub struct HourlyForecastStore {
    csv_path: PathBuf,
    generated_time: String,
    forecasts: Vec<HourlyForecast>,
}

impl HourlyForecastStore {
    /// Creates an empty store for the given source file and forecast
    /// generation timestamp.
    pub fn new(csv_path: impl Into<PathBuf>, generated_time: impl Into<String>) -> Self {
        HourlyForecastStore {
            csv_path: csv_path.into(),
            generated_time: generated_time.into(),
            forecasts: Vec::new(),
        }
    }

    /// Reads the source file, skipping rows that fail to construct.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] when the file cannot be opened,
    /// [`StoreError::Read`] when the header row cannot be read, and
    /// [`StoreError::MissingTimestampColumn`] when the header names neither
    /// `timestamp` nor `start_time`. Row-level failures are not errors: each
    /// is logged with the offending field and the row is dropped.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.csv_path)
            .map_err(|e| StoreError::Open(self.csv_path.clone(), e))?;
        let headers = reader
            .headers()
            .map_err(|e| StoreError::Read(self.csv_path.clone(), e))?
            .clone();

        let timestamp_key = if headers.iter().any(|h| h == "timestamp") {
            "timestamp"
        } else if headers.iter().any(|h| h == "start_time") {
            "start_time"
        } else {
            return Err(StoreError::MissingTimestampColumn(self.csv_path.clone()));
        };

        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(
                        "Skipping unreadable row in {}: {}",
                        self.csv_path.display(),
                        e
                    );
                    continue;
                }
            };
            let fields = row_fields(&headers, &row);
            match HourlyForecast::from_fields(&fields, timestamp_key) {
                Ok(forecast) => self.forecasts.push(forecast),
                Err(e) => {
                    warn!("Skipping invalid row in {}: {}", self.csv_path.display(), e);
                }
            }
        }
        Ok(())
    }

    /// The loaded records, in source row order.
    pub fn forecasts(&self) -> &[HourlyForecast] {
        &self.forecasts
    }

    /// When the upstream forecast was generated.
    pub fn generated_time(&self) -> &str {
        &self.generated_time
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

impl fmt::Display for HourlyForecastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hourly Forecast Store\nGenerated at: {}\nNumber of forecasts: {}",
            self.generated_time,
            self.forecasts.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const HOURLY_HEADER: &str = "forecast_period,start_time,temperature,temperature_unit,precipitation_probability_unit,precipitation_probability_value,dewpoint_unit,dewpoint_value,relative_humidity_unit,relative_humidity_value,wind_speed,wind_direction,weather_icon_url,short_forecast";

    fn hourly_row(period: u32, temperature: &str) -> String {
        format!(
            "{period},2025-04-28T{hour:02}:00:00-05:00,{temperature},F,wmoUnit:percent,90,wmoUnit:degC,10,wmoUnit:percent,65,10 mph,S,https://api.weather.gov/icons/land/day/rain,Rain",
            hour = 10 + period,
        )
    }

    fn write_csv(rows: &[String]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hourly_forecast_data.csv");
        let mut contents = String::from(HOURLY_HEADER);
        for row in rows {
            contents.push('\n');
            contents.push_str(row);
        }
        contents.push('\n');
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn detects_start_time_header() {
        let (_dir, path) = write_csv(&[hourly_row(1, "60")]);

        let mut store = HourlyForecastStore::new(&path, "2025-04-28T05:30:00+00:00");
        store.load().unwrap();

        assert_eq!(store.forecasts().len(), 1);
        assert_eq!(store.forecasts()[0].forecast_hour, "11:00");
    }

    #[test]
    fn skips_malformed_rows_and_keeps_the_rest() {
        let (_dir, path) = write_csv(&[
            hourly_row(1, "60"),
            hourly_row(2, "61"),
            hourly_row(3, "sixty-two"),
            hourly_row(4, "63"),
            hourly_row(5, "64"),
        ]);

        let mut store = HourlyForecastStore::new(&path, "");
        store.load().unwrap();

        let forecasts = store.forecasts();
        assert_eq!(forecasts.len(), 4);
        assert_eq!(forecasts[0].temperature_f, 60.0);
        assert_eq!(forecasts[1].temperature_f, 61.0);
        // The row with the non-numeric temperature is gone.
        assert_eq!(forecasts[2].temperature_f, 63.0);
        assert_eq!(forecasts[3].temperature_f, 64.0);
    }

    #[test]
    fn fails_when_no_timestamp_column_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hourly_forecast_data.csv");
        fs::write(&path, "temperature,temperature_unit\n60,F\n").unwrap();

        let mut store = HourlyForecastStore::new(&path, "");
        let err = store.load().unwrap_err();

        assert!(matches!(err, StoreError::MissingTimestampColumn(..)));
        assert!(store.forecasts().is_empty());
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        let mut store = HourlyForecastStore::new(&path, "");
        assert!(matches!(store.load().unwrap_err(), StoreError::Open(..)));
    }

    #[test]
    fn prefers_timestamp_over_start_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hourly_forecast_data.csv");
        let header = format!("timestamp,{HOURLY_HEADER}");
        let row = format!("2025-04-28T09:00:00-05:00,{}", hourly_row(1, "60"));
        fs::write(&path, format!("{header}\n{row}\n")).unwrap();

        let mut store = HourlyForecastStore::new(&path, "");
        store.load().unwrap();

        assert_eq!(store.forecasts().len(), 1);
        assert_eq!(store.forecasts()[0].forecast_hour, "09:00");
    }
}
