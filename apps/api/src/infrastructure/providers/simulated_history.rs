use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use rand::Rng;

use crate::domain::{
    environment::{provider::HistoryProvider, sample::HistoricalEntry},
    shared::errors::DomainError,
    ward::entity::Coordinates,
};

/// Stand-in for a historical weather API.
///
/// OpenWeatherMap only serves history on paid plans, so past days are drawn at
/// random: rain uniform in [0, 10) mm, labelled `Rain` roughly 30% of the time.
pub struct SimulatedHistoryProvider {
    days: u32,
}

impl SimulatedHistoryProvider {
    pub fn new(days: u32) -> Self {
        Self { days }
    }
}

/// Entries for the `days` days before `today`, most recent first.
pub fn simulate_history<R: Rng + ?Sized>(
    today: NaiveDate,
    days: u32,
    rng: &mut R,
) -> Vec<HistoricalEntry> {
    (1..=days)
        .filter_map(|offset| today.checked_sub_days(Days::new(offset as u64)))
        .map(|date| {
            let rain_mm = rng.gen_range(0.0..10.0);
            let weather_label = if rng.gen_bool(0.3) { "Rain" } else { "Clear" };
            HistoricalEntry {
                date,
                rain_mm,
                weather_label: weather_label.to_string(),
            }
        })
        .collect()
}

#[async_trait]
impl HistoryProvider for SimulatedHistoryProvider {
    async fn fetch_historical(&self, _at: Coordinates) -> Result<Vec<HistoricalEntry>, DomainError> {
        let today = Utc::now().date_naive();
        Ok(simulate_history(today, self.days, &mut rand::thread_rng()))
    }
}
