//! One normalized hourly forecast row.

use crate::icons::symbol_for_icon;
use crate::records::{numeric_field, required_field, RecordError};
use crate::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

/// WMO unit code the NWS API uses for Celsius values.
pub const WMO_DEG_C: &str = "wmoUnit:degC";
/// WMO unit code the NWS API uses for Fahrenheit values.
pub const WMO_DEG_F: &str = "wmoUnit:degF";

/// A single hourly forecast period with both raw and display-ready fields.
///
/// Unlike [`DailyForecast`](crate::DailyForecast), construction is strict:
/// every source field is required and unit tokens must match exactly, so a
/// value of this type always carries a complete, converted set of readings.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecast {
    /// Period start, as reported upstream (RFC 3339 with offset).
    pub timestamp: DateTime<FixedOffset>,
    pub temperature_f: f64,
    pub temperature_c: f64,
    pub dewpoint_f: f64,
    pub dewpoint_c: f64,
    /// Chance of precipitation, percent.
    pub precipitation_probability: f64,
    /// Relative humidity, percent.
    pub relative_humidity: f64,
    pub wind_speed: String,
    pub wind_direction: String,
    pub icon_url: String,
    pub short_forecast: String,
    /// Display symbol derived from `icon_url`.
    pub weather_symbol: &'static str,
    /// `timestamp` as `HH:MM`.
    pub forecast_hour: String,
    /// `timestamp` as `YYYY-MM-DD`.
    pub forecast_date: String,
    /// `precipitation_probability` with a `%` suffix.
    pub chance_of_rain: String,
    /// Temperature rounded to the nearest integer with a ` F` suffix.
    pub temperature_display: String,
    /// Dewpoint rounded to the nearest integer with a ` F` suffix.
    pub dewpoint_display: String,
    /// `relative_humidity` with a `%` suffix.
    pub humidity_display: String,
    /// Wind speed and direction joined, collapsing if either is empty.
    pub wind: String,
}

impl HourlyForecast {
    /// Builds a record from a raw row mapping.
    ///
    /// `timestamp_key` names the field holding the period start; the two
    /// upstream conventions are `timestamp` and `start_time`, and the caller
    /// (normally [`HourlyForecastStore`](crate::HourlyForecastStore)) decides
    /// which one the source uses.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] when any required key is absent,
    /// and [`RecordError::InvalidValue`] when a value does not parse or a
    /// unit token is not one of the accepted spellings (`F`/`C` for
    /// temperature, [`WMO_DEG_F`]/[`WMO_DEG_C`] for dewpoint).
    pub fn from_fields(
        fields: &HashMap<String, String>,
        timestamp_key: &str,
    ) -> Result<HourlyForecast, RecordError> {
        let timestamp_text = required_field(fields, timestamp_key)?;
        let timestamp = DateTime::parse_from_rfc3339(timestamp_text.trim())
            .map_err(|_| RecordError::invalid(timestamp_key, timestamp_text))?;

        let temperature_value = numeric_field(fields, "temperature")?;
        let temperature_unit = required_field(fields, "temperature_unit")?.trim();
        let (temperature_f, temperature_c) = match temperature_unit {
            "F" => (temperature_value, fahrenheit_to_celsius(temperature_value)),
            "C" => (celsius_to_fahrenheit(temperature_value), temperature_value),
            other => return Err(RecordError::invalid("temperature_unit", other)),
        };

        let dewpoint_value = numeric_field(fields, "dewpoint_value")?;
        let dewpoint_unit = required_field(fields, "dewpoint_unit")?.trim();
        let (dewpoint_f, dewpoint_c) = match dewpoint_unit {
            WMO_DEG_F => (dewpoint_value, fahrenheit_to_celsius(dewpoint_value)),
            WMO_DEG_C => (celsius_to_fahrenheit(dewpoint_value), dewpoint_value),
            other => return Err(RecordError::invalid("dewpoint_unit", other)),
        };

        let precipitation_probability = numeric_field(fields, "precipitation_probability_value")?;
        let relative_humidity = numeric_field(fields, "relative_humidity_value")?;
        let wind_speed = required_field(fields, "wind_speed")?.to_string();
        let wind_direction = required_field(fields, "wind_direction")?.to_string();
        let icon_url = required_field(fields, "weather_icon_url")?.to_string();
        let short_forecast = required_field(fields, "short_forecast")?.to_string();

        let weather_symbol = symbol_for_icon(&icon_url);
        let forecast_hour = timestamp.format("%H:%M").to_string();
        let forecast_date = timestamp.format("%Y-%m-%d").to_string();
        let chance_of_rain = format!("{precipitation_probability}%");
        let temperature_display = format!("{temperature_f:.0} F");
        let dewpoint_display = format!("{dewpoint_f:.0} F");
        let humidity_display = format!("{relative_humidity}%");
        let wind = format!("{wind_speed} {wind_direction}").trim().to_string();

        Ok(HourlyForecast {
            timestamp,
            temperature_f,
            temperature_c,
            dewpoint_f,
            dewpoint_c,
            precipitation_probability,
            relative_humidity,
            wind_speed,
            wind_direction,
            icon_url,
            short_forecast,
            weather_symbol,
            forecast_hour,
            forecast_date,
            chance_of_rain,
            temperature_display,
            dewpoint_display,
            humidity_display,
            wind,
        })
    }
}
