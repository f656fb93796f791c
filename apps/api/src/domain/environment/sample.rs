use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Environmental inputs of one assessment.
///
/// Elevation is fetched once per ward selection; rainfall starts at the
/// observed value and is then driven by the simulation slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnvironmentalSample {
    pub elevation_meters: f64,
    pub rainfall_mm: f64,
}

impl EnvironmentalSample {
    pub fn new(elevation_meters: f64, rainfall_mm: f64) -> Self {
        Self {
            elevation_meters,
            rainfall_mm,
        }
    }

    /// Same elevation, new rainfall.
    pub fn with_rainfall(self, rainfall_mm: f64) -> Self {
        Self {
            rainfall_mm,
            ..self
        }
    }
}

/// One 3-hour forecast slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub rain_mm: f64,
    pub weather_label: String,
    pub temp_c: f64,
}

/// Rainfall summary of one past day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoricalEntry {
    pub date: NaiveDate,
    pub rain_mm: f64,
    pub weather_label: String,
}

/// Number of forecast slots shown in the detail panel.
pub const FORECAST_DIGEST_SLOTS: usize = 3;

/// Number of past days shown in the detail panel.
pub const HISTORY_DIGEST_DAYS: usize = 3;

/// Every third slot of the first nine, i.e. one reading per ~9 hours.
pub fn forecast_digest(forecast: &[ForecastEntry]) -> Vec<ForecastEntry> {
    forecast
        .iter()
        .take(FORECAST_DIGEST_SLOTS * 3)
        .step_by(3)
        .take(FORECAST_DIGEST_SLOTS)
        .cloned()
        .collect()
}

pub fn history_digest(history: &[HistoricalEntry]) -> Vec<HistoricalEntry> {
    history.iter().take(HISTORY_DIGEST_DAYS).cloned().collect()
}
