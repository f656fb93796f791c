use super::dto::{AssessmentResponse, SelectionResponse, WardDetailResponse};
use crate::{
    domain::{
        environment::{
            provider::{ElevationProvider, HistoryProvider, WeatherProvider},
            sample::{
                EnvironmentalSample, ForecastEntry, HistoricalEntry, forecast_digest,
                history_digest,
            },
        },
        risk::level::RiskInterpretation,
        session::state::{SelectionOutcome, SelectionTicket},
        shared::errors::DomainError,
        ward::{entity::Ward, repository::WardCatalog},
    },
    infrastructure::session::SharedSession,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

struct GatheredData {
    ward: Ward,
    sample: EnvironmentalSample,
    forecast: Vec<ForecastEntry>,
    history: Vec<HistoricalEntry>,
}

/// Drives a session through its two recompute events: a ward selection
/// resolving and the simulated rainfall changing.
///
/// Ward, elevation and rainfall are required; a failure on any of them aborts
/// the selection and leaves the displayed risk as it was. Forecast and history
/// are display-only and degrade to empty lists.
pub struct AssessWardUseCase {
    catalog: Arc<dyn WardCatalog>,
    elevation: Arc<dyn ElevationProvider>,
    weather: Arc<dyn WeatherProvider>,
    history: Arc<dyn HistoryProvider>,
}

impl AssessWardUseCase {
    pub fn new(
        catalog: Arc<dyn WardCatalog>,
        elevation: Arc<dyn ElevationProvider>,
        weather: Arc<dyn WeatherProvider>,
        history: Arc<dyn HistoryProvider>,
    ) -> Self {
        Self {
            catalog,
            elevation,
            weather,
            history,
        }
    }

    /// Selects `ward_id`, fetches its environmental data and resolves the risk.
    ///
    /// The session lock is only taken around state transitions, never across a
    /// provider call, so a newer selection can start while this one is loading.
    /// If that happens the result of this call is discarded.
    #[instrument(skip(self, session))]
    pub async fn select_ward(
        &self,
        session: &SharedSession,
        ward_id: &str,
    ) -> Result<SelectionResponse, DomainError> {
        let (session_id, ticket) = {
            let mut state = session.lock().await;
            (state.id(), state.begin_selection(ward_id))
        };

        let gathered = match self.gather(ward_id).await {
            Ok(gathered) => gathered,
            Err(err) => {
                let current = session.lock().await.fail_selection(&ticket, &err);
                if !current {
                    return Ok(superseded(session_id, &ticket));
                }
                warn!(error = %err, "ward selection aborted");
                return Err(err);
            }
        };

        let outcome = session.lock().await.complete_selection(
            &ticket,
            gathered.ward.clone(),
            gathered.sample,
        )?;

        match outcome {
            SelectionOutcome::Superseded => Ok(superseded(session_id, &ticket)),
            SelectionOutcome::Applied(assessment) => {
                info!(
                    base = %assessment.base_risk,
                    current = %assessment.current_risk,
                    "ward assessed"
                );
                Ok(SelectionResponse::Applied(WardDetailResponse {
                    session_id,
                    actual_rainfall_mm: gathered.sample.rainfall_mm,
                    interpretation: RiskInterpretation::describe(
                        assessment.current_risk,
                        gathered.sample.rainfall_mm,
                    ),
                    ward: gathered.ward,
                    sample: gathered.sample,
                    assessment,
                    forecast: forecast_digest(&gathered.forecast),
                    history: history_digest(&gathered.history),
                }))
            }
        }
    }

    /// Re-resolves the selected ward with a new simulated rainfall.
    ///
    /// Uses the elevation cached in the session; no provider is called.
    #[instrument(skip(self, session))]
    pub async fn simulate_rainfall(
        &self,
        session: &SharedSession,
        rainfall_mm: f64,
    ) -> Result<AssessmentResponse, DomainError> {
        let mut state = session.lock().await;
        let assessment = state.simulate_rainfall(rainfall_mm)?;

        let (Some(ward), Some(sample)) = (state.ward(), state.sample()) else {
            return Err(DomainError::InvalidInput(
                "no ward has been resolved for this session".into(),
            ));
        };
        debug!(ward = %ward.id, current = %assessment.current_risk, "rainfall simulated");

        Ok(AssessmentResponse {
            session_id: state.id(),
            ward_id: ward.id.clone(),
            sample: *sample,
            assessment,
            interpretation: RiskInterpretation::describe(assessment.current_risk, rainfall_mm),
        })
    }

    async fn gather(&self, ward_id: &str) -> Result<GatheredData, DomainError> {
        let ward = self.catalog.fetch_ward(ward_id).await?;
        let at = ward.coordinates;

        let (elevation, rainfall, forecast, history) = tokio::join!(
            self.elevation.fetch_elevation(at),
            self.weather.fetch_rainfall(at),
            self.weather.fetch_forecast(at),
            self.history.fetch_historical(at),
        );

        let sample = EnvironmentalSample::new(elevation?, rainfall?);
        let forecast = forecast.unwrap_or_else(|err| {
            warn!(error = %err, "forecast unavailable, continuing without it");
            Vec::new()
        });
        let history = history.unwrap_or_else(|err| {
            warn!(error = %err, "history unavailable, continuing without it");
            Vec::new()
        });

        Ok(GatheredData {
            ward,
            sample,
            forecast,
            history,
        })
    }
}

fn superseded(session_id: uuid::Uuid, ticket: &SelectionTicket) -> SelectionResponse {
    debug!(ward = %ticket.ward_id(), "selection superseded");
    SelectionResponse::Superseded {
        session_id,
        ward_id: ticket.ward_id().to_string(),
    }
}
