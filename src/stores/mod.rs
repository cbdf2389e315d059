mod daily;
mod error;
mod hourly;

pub use daily::DailyForecastStore;
pub use error::StoreError;
pub use hourly::HourlyForecastStore;

use csv::StringRecord;
use std::collections::HashMap;

/// Zips a header row with a data row into the raw field mapping the record
/// constructors consume. Short rows simply produce fewer keys.
pub(crate) fn row_fields(headers: &StringRecord, row: &StringRecord) -> HashMap<String, String> {
    headers
        .iter()
        .zip(row.iter())
        .map(|(header, value)| (header.to_string(), value.to_string()))
        .collect()
}
