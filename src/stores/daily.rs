//! Owns the collection of daily forecast records loaded from one CSV file.

use crate::records::DailyForecast;
use crate::stores::{row_fields, StoreError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Loads and holds [`DailyForecast`] records from a persisted CSV source.
///
/// Record construction is tolerant (bad data degrades to sentinels), so the
/// only way a load fails is the file itself being unreadable. The store is
/// valid while empty; records appear in source row order after [`load`].
///
/// [`load`]: DailyForecastStore::load
#[derive(Debug)]
pub struct DailyForecastStore {
    csv_path: PathBuf,
    generated_time: String,
    forecasts: Vec<DailyForecast>,
}

impl DailyForecastStore {
    /// Creates an empty store for the given source file and forecast
    /// generation timestamp.
    pub fn new(csv_path: impl Into<PathBuf>, generated_time: impl Into<String>) -> Self {
        DailyForecastStore {
            csv_path: csv_path.into(),
            generated_time: generated_time.into(),
            forecasts: Vec::new(),
        }
    }

    /// Reads the source file and constructs one record per data row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] when the file cannot be opened and
    /// [`StoreError::Read`] on a mid-file read failure; the collection is
    /// left empty in both cases. Individual rows never fail.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.csv_path)
            .map_err(|e| StoreError::Open(self.csv_path.clone(), e))?;
        let headers = reader
            .headers()
            .map_err(|e| StoreError::Read(self.csv_path.clone(), e))?
            .clone();

        for row in reader.records() {
            let row = row.map_err(|e| StoreError::Read(self.csv_path.clone(), e))?;
            let fields = row_fields(&headers, &row);
            self.forecasts.push(DailyForecast::from_fields(&fields));
        }
        Ok(())
    }

    /// The loaded records, in source row order.
    pub fn forecasts(&self) -> &[DailyForecast] {
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

impl fmt::Display for DailyForecastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Daily Forecast Store\nGenerated at: {}\nNumber of forecasts: {}",
            self.generated_time,
            self.forecasts.len()
        )
    }
}
