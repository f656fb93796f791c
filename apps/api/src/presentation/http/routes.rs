use super::{
    handlers::{cities, dashboard, docs, health, risk, sessions, wards, ws},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Catalog
        .route("/api/v1/cities", get(cities::list_cities))
        .route("/api/v1/cities/{city_id}", get(cities::get_city))
        .route(
            "/api/v1/cities/{city_id}/wards",
            get(cities::list_ward_markers),
        )
        .route("/api/v1/wards/{ward_id}", get(wards::get_ward))
        .route("/api/v1/legend", get(cities::get_legend))
        // Risk engine
        .route("/api/v1/risk/classify", get(risk::classify))
        // Dashboard sessions
        .route("/api/v1/sessions", post(sessions::create_session))
        .route("/api/v1/sessions/{id}", get(sessions::get_session))
        .route(
            "/api/v1/sessions/{id}/selection",
            post(sessions::select_ward),
        )
        .route(
            "/api/v1/sessions/{id}/rainfall",
            put(sessions::simulate_rainfall),
        )
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        .route_layer(middleware::from_fn(logging_middleware));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Dashboard
        .route("/", get(dashboard::index))
        .route("/styles.css", get(dashboard::styles))
        .route("/app.js", get(dashboard::script))
        // WebSocket live feed
        .route("/ws/feed", get(ws::ws_handler))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
