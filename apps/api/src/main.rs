use axum::extract::DefaultBodyLimit;
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use waterlog_api::{
    application::{
        assess_ward::use_case::AssessWardUseCase, browse_catalog::use_case::BrowseCatalogUseCase,
    },
    config::Config,
    infrastructure::{
        catalog::StaticWardCatalog,
        notifications::broadcast_listener::BroadcastRiskListener,
        providers::{
            OpenElevationProvider, OpenWeatherProvider, SimulatedHistoryProvider, build_client,
        },
        session::SessionRegistry,
    },
    presentation::http::{routes::create_router, state::AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,waterlog_api=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    if config.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY is not set; ward selections will fail on rainfall");
    }

    let client = build_client(
        Duration::from_secs(config.provider_timeout_seconds),
        &config.provider_user_agent,
    )?;

    let catalog = Arc::new(StaticWardCatalog::new());
    let elevation = Arc::new(OpenElevationProvider::new(
        client.clone(),
        config.elevation_base_url.clone(),
    ));
    let weather = Arc::new(OpenWeatherProvider::new(
        client,
        config.openweather_base_url.clone(),
        config.openweather_api_key.clone(),
        config.forecast_limit,
    ));
    let history = Arc::new(SimulatedHistoryProvider::new(config.history_days));

    let (tx, _) = broadcast::channel(100);
    let broadcaster = Arc::new(tx);
    let sessions = SessionRegistry::new(config.session_capacity)
        .with_listener(Arc::new(BroadcastRiskListener::new(broadcaster.clone())));

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(BrowseCatalogUseCase::new(catalog.clone())),
        assessments: Arc::new(AssessWardUseCase::new(catalog, elevation, weather, history)),
        sessions: Arc::new(sessions),
        ws_broadcaster: broadcaster,
    };

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));
    let cors = if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    };

    let app = create_router(state)
        .layer(DefaultBodyLimit::max(16 * 1024))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("waterlogging dashboard listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
