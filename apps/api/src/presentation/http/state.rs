use crate::{
    application::{
        assess_ward::use_case::AssessWardUseCase, browse_catalog::use_case::BrowseCatalogUseCase,
    },
    config::Config,
    infrastructure::session::SessionRegistry,
};
use std::sync::Arc;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<BrowseCatalogUseCase>,
    pub assessments: Arc<AssessWardUseCase>,
    pub sessions: Arc<SessionRegistry>,
    pub ws_broadcaster: Arc<broadcast::Sender<String>>,
}
