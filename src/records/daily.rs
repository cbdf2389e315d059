//! One normalized daily forecast row.

use crate::records::{text_field, NOT_AVAILABLE};
use crate::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};
use std::collections::HashMap;

/// A single daily forecast period with display-ready text fields.
///
/// Constructed once by [`DailyForecast::from_fields`] at load time and
/// immutable afterwards. The two temperature fields are either both a
/// converted pair (`"60 F"` / `"16 C"`) or both the `"N/A"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyForecast {
    pub period_name: String,
    pub temperature_fahrenheit: String,
    pub temperature_celsius: String,
    pub chance_of_rain: String,
    pub icon_url: String,
    pub detailed_forecast: String,
}

impl DailyForecast {
    /// Builds a record from a raw row mapping, degrading bad data to sentinels.
    ///
    /// Every field is trimmed and a missing key reads as empty text. This
    /// constructor never fails: an empty, unparseable or unrecognized
    /// temperature/unit combination yields `"N/A"` for both temperature
    /// outputs, and an empty precipitation probability yields `"N/A"` for
    /// `chance_of_rain`.
    ///
    /// The precipitation, icon and name lookups also accept the column names
    /// used by the persisted daily CSV (`precipitation_probability_value`,
    /// `weather_icon_url`, `name`) as fallbacks.
    pub fn from_fields(fields: &HashMap<String, String>) -> DailyForecast {
        let period_name = text_field(fields, &["period_name", "name"]);
        let temperature = text_field(fields, &["temperature"]);
        let temperature_unit = text_field(fields, &["temperature_unit"]).to_uppercase();
        let precipitation = text_field(
            fields,
            &[
                "probability_of_precipitation",
                "precipitation_probability_value",
            ],
        );
        let icon_url = text_field(fields, &["icon", "weather_icon_url"]);
        let detailed_forecast = text_field(fields, &["detailed_forecast"]);

        let (temperature_fahrenheit, temperature_celsius) =
            convert_temperature(&temperature, &temperature_unit);

        let chance_of_rain = if precipitation.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            format!("{precipitation}%")
        };

        DailyForecast {
            period_name,
            temperature_fahrenheit,
            temperature_celsius,
            chance_of_rain,
            icon_url,
            detailed_forecast,
        }
    }
}

/// Produces the Fahrenheit/Celsius display pair, or the sentinel pair.
///
/// The native unit keeps its value integer-truncated while the derived unit
/// is rounded to the nearest integer. The asymmetry is deliberate: the native
/// value is displayed as reported upstream.
fn convert_temperature(value: &str, unit: &str) -> (String, String) {
    if value.is_empty() || unit.is_empty() {
        return not_available_pair();
    }
    let Ok(temperature) = value.parse::<f64>() else {
        return not_available_pair();
    };
    match unit {
        "F" => {
            let celsius = fahrenheit_to_celsius(temperature);
            (
                format!("{} F", temperature as i64),
                format!("{} C", celsius.round() as i64),
            )
        }
        "C" => {
            let fahrenheit = celsius_to_fahrenheit(temperature);
            (
                format!("{} F", fahrenheit.round() as i64),
                format!("{} C", temperature as i64),
            )
        }
        _ => not_available_pair(),
    }
}

fn not_available_pair() -> (String, String) {
    (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
}
