mod daily;
mod error;
mod hourly;

pub use daily::DailyForecast;
pub use error::RecordError;
pub use hourly::{HourlyForecast, WMO_DEG_C, WMO_DEG_F};

use std::collections::HashMap;

/// Placeholder text for unavailable or unparseable data.
pub const NOT_AVAILABLE: &str = "N/A";

/// Looks up the first present key and returns its trimmed value.
///
/// Used by the tolerant daily constructor: a missing key reads as empty text.
pub(crate) fn text_field(fields: &HashMap<String, String>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| fields.get(*key))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Looks up a key that must be present, without trimming.
pub(crate) fn required_field<'a>(
    fields: &'a HashMap<String, String>,
    key: &str,
) -> Result<&'a str, RecordError> {
    fields
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| RecordError::MissingField(key.to_string()))
}

/// Looks up a required key and parses it as a number.
pub(crate) fn numeric_field(
    fields: &HashMap<String, String>,
    key: &str,
) -> Result<f64, RecordError> {
    let text = required_field(fields, key)?;
    text.trim().parse().map_err(|_| RecordError::InvalidValue {
        field: key.to_string(),
        value: text.to_string(),
    })
}
