//! Writes fetched forecast periods to their CSV destinations.
//!
//! The column sets and their order are the external contract shared with the
//! record stores and any other consumer of the files; they must not change.

use crate::sync::api::{Measurement, Period};
use crate::sync::SyncError;
use std::path::Path;

/// Column order of the daily forecast file.
pub const DAILY_HEADERS: [&str; 15] = [
    "forecast_period",
    "name",
    "start_time",
    "end_time",
    "isDaytime",
    "temperature",
    "temperature_unit",
    "temperature_trend",
    "precipitation_probability_unit",
    "precipitation_probability_value",
    "wind_speed",
    "wind_direction",
    "weather_icon_url",
    "short_forecast",
    "detailed_forecast",
];

/// Column order of the hourly forecast file.
pub const HOURLY_HEADERS: [&str; 14] = [
    "forecast_period",
    "start_time",
    "temperature",
    "temperature_unit",
    "precipitation_probability_unit",
    "precipitation_probability_value",
    "dewpoint_unit",
    "dewpoint_value",
    "relative_humidity_unit",
    "relative_humidity_value",
    "wind_speed",
    "wind_direction",
    "weather_icon_url",
    "short_forecast",
];

/// Writes the daily period list to `path`, one row per period.
pub fn write_daily_csv(path: &Path, periods: &[Period]) -> Result<(), SyncError> {
    let mut writer = open_writer(path)?;
    writer
        .write_record(DAILY_HEADERS)
        .map_err(|e| SyncError::CsvWrite(path.to_path_buf(), e))?;
    for period in periods {
        writer
            .write_record([
                integer(period.number),
                text(&period.name),
                text(&period.start_time),
                text(&period.end_time),
                boolean(period.is_daytime),
                number(period.temperature),
                text(&period.temperature_unit),
                text(&period.temperature_trend),
                measurement_unit(&period.probability_of_precipitation),
                measurement_value(&period.probability_of_precipitation),
                text(&period.wind_speed),
                text(&period.wind_direction),
                text(&period.icon),
                text(&period.short_forecast),
                text(&period.detailed_forecast),
            ])
            .map_err(|e| SyncError::CsvWrite(path.to_path_buf(), e))?;
    }
    flush(writer, path)
}

/// Writes the hourly period list to `path`, one row per period.
pub fn write_hourly_csv(path: &Path, periods: &[Period]) -> Result<(), SyncError> {
    let mut writer = open_writer(path)?;
    writer
        .write_record(HOURLY_HEADERS)
        .map_err(|e| SyncError::CsvWrite(path.to_path_buf(), e))?;
    for period in periods {
        writer
            .write_record([
                integer(period.number),
                text(&period.start_time),
                number(period.temperature),
                text(&period.temperature_unit),
                measurement_unit(&period.probability_of_precipitation),
                measurement_value(&period.probability_of_precipitation),
                measurement_unit(&period.dewpoint),
                measurement_value(&period.dewpoint),
                measurement_unit(&period.relative_humidity),
                measurement_value(&period.relative_humidity),
                text(&period.wind_speed),
                text(&period.wind_direction),
                text(&period.icon),
                text(&period.short_forecast),
            ])
            .map_err(|e| SyncError::CsvWrite(path.to_path_buf(), e))?;
    }
    flush(writer, path)
}

fn open_writer(path: &Path) -> Result<csv::Writer<std::fs::File>, SyncError> {
    csv::Writer::from_path(path).map_err(|e| SyncError::CsvWrite(path.to_path_buf(), e))
}

fn flush(mut writer: csv::Writer<std::fs::File>, path: &Path) -> Result<(), SyncError> {
    writer
        .flush()
        .map_err(|e| SyncError::CsvWrite(path.to_path_buf(), csv::Error::from(e)))
}

// Absent values render as empty fields, never omitted columns.

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn integer(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn boolean(value: Option<bool>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Renders whole numbers without a trailing `.0` so they round-trip as the
/// integers the API sent.
fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn measurement_unit(measurement: &Option<Measurement>) -> String {
    measurement
        .as_ref()
        .and_then(|m| m.unit_code.clone())
        .unwrap_or_default()
}

fn measurement_value(measurement: &Option<Measurement>) -> String {
    number(measurement.as_ref().and_then(|m| m.value))
}
