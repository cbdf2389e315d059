mod client;
mod error;
mod icons;
mod records;
mod stores;
mod sync;
mod units;
mod utils;

pub use error::NwsForecastError;

pub use client::*;

pub use icons::{icon_code, symbol_for_icon, UNKNOWN_SYMBOL};

pub use records::{
    DailyForecast, HourlyForecast, RecordError, NOT_AVAILABLE, WMO_DEG_C, WMO_DEG_F,
};

pub use stores::{DailyForecastStore, HourlyForecastStore, StoreError};

pub use sync::{
    write_daily_csv, write_hourly_csv, ForecastResponse, ForecastSync, Measurement, Period,
    PointsResponse, SyncError, SyncOutcome, DAILY_HEADERS, HOURLY_HEADERS, POINTS_URL,
};

pub use units::{celsius_to_fahrenheit, fahrenheit_to_celsius};
