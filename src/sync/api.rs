//! Serde models for the slices of the NWS API payloads this crate consumes.

use chrono::Local;
use serde::Deserialize;

/// Response of `https://api.weather.gov/points/{lat},{lon}`.
///
/// Only the two forecast endpoint references are consumed; their absence is
/// a shape error because the sync cannot proceed without them.
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsProperties {
    /// Endpoint for the daily (12-hour period) forecast.
    pub forecast: String,
    /// Endpoint for the hourly forecast.
    pub forecast_hourly: String,
}

/// Response of a forecast endpoint (daily or hourly, same envelope).
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProperties {
    /// When the upstream service computed this forecast.
    pub generated_at: Option<String>,
    #[serde(default)]
    pub periods: Vec<Period>,
}

impl ForecastProperties {
    /// The generation timestamp, falling back to the current time when the
    /// upstream omits it.
    pub fn generated_at_or_now(&self) -> String {
        self.generated_at
            .clone()
            .unwrap_or_else(|| Local::now().to_rfc3339())
    }
}

/// One forecast period. Every field is optional: missing values persist as
/// empty CSV cells rather than failing the sync.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Period {
    pub number: Option<i64>,
    /// Period name such as "Monday Night"; daily forecasts only.
    pub name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Day/night flag; daily forecasts only.
    pub is_daytime: Option<bool>,
    pub temperature: Option<f64>,
    pub temperature_unit: Option<String>,
    pub temperature_trend: Option<String>,
    pub probability_of_precipitation: Option<Measurement>,
    /// Hourly forecasts only.
    pub dewpoint: Option<Measurement>,
    /// Hourly forecasts only.
    pub relative_humidity: Option<Measurement>,
    pub wind_speed: Option<String>,
    pub wind_direction: Option<String>,
    pub icon: Option<String>,
    pub short_forecast: Option<String>,
    pub detailed_forecast: Option<String>,
}

/// A numeric value tagged with a WMO unit code.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Measurement {
    pub unit_code: Option<String>,
    pub value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_points_response() {
        let payload = r#"{
            "properties": {
                "forecast": "https://api.weather.gov/gridpoints/OKX/33,35/forecast",
                "forecastHourly": "https://api.weather.gov/gridpoints/OKX/33,35/forecast/hourly",
                "gridId": "OKX"
            }
        }"#;

        let points: PointsResponse = serde_json::from_str(payload).unwrap();
        assert!(points.properties.forecast.ends_with("/forecast"));
        assert!(points.properties.forecast_hourly.ends_with("/hourly"));
    }

    #[test]
    fn missing_properties_is_a_decode_error() {
        let payload = r#"{"title": "Not Found"}"#;
        assert!(serde_json::from_str::<PointsResponse>(payload).is_err());
    }

    #[test]
    fn decodes_forecast_periods() {
        let payload = r#"{
            "properties": {
                "generatedAt": "2025-04-28T05:30:00+00:00",
                "periods": [{
                    "number": 1,
                    "name": "Monday",
                    "startTime": "2025-04-28T06:00:00-05:00",
                    "endTime": "2025-04-28T18:00:00-05:00",
                    "isDaytime": true,
                    "temperature": 60,
                    "temperatureUnit": "F",
                    "temperatureTrend": null,
                    "probabilityOfPrecipitation": {"unitCode": "wmoUnit:percent", "value": 90},
                    "windSpeed": "10 mph",
                    "windDirection": "S",
                    "icon": "https://api.weather.gov/icons/land/day/tsra_sct?size=medium",
                    "shortForecast": "Thunderstorms",
                    "detailedForecast": "Scattered thunderstorms."
                }]
            }
        }"#;

        let forecast: ForecastResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(
            forecast.properties.generated_at_or_now(),
            "2025-04-28T05:30:00+00:00"
        );
        let period = &forecast.properties.periods[0];
        assert_eq!(period.number, Some(1));
        assert_eq!(period.temperature, Some(60.0));
        assert_eq!(period.temperature_trend, None);
        let pop = period.probability_of_precipitation.as_ref().unwrap();
        assert_eq!(pop.value, Some(90.0));
        assert_eq!(pop.unit_code.as_deref(), Some("wmoUnit:percent"));
    }

    #[test]
    fn tolerates_sparse_periods() {
        let payload = r#"{"properties": {"periods": [{"number": 2}]}}"#;

        let forecast: ForecastResponse = serde_json::from_str(payload).unwrap();
        let period = &forecast.properties.periods[0];
        assert_eq!(period.number, Some(2));
        assert!(period.name.is_none());
        assert!(period.dewpoint.is_none());
        // generatedAt missing: the fallback supplies a timestamp.
        assert!(!forecast.properties.generated_at_or_now().is_empty());
    }
}
