use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Waterlog API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/cities": { "get": { "summary": "List supported cities" } },
            "/api/v1/cities/{city_id}": { "get": { "summary": "Get city map settings" } },
            "/api/v1/cities/{city_id}/wards": { "get": { "summary": "Ward markers coloured by curated risk" } },
            "/api/v1/wards/{ward_id}": { "get": { "summary": "Get ward by id" } },
            "/api/v1/legend": { "get": { "summary": "Risk level colours and glyphs" } },
            "/api/v1/risk/classify": { "get": { "summary": "Stateless assessment (elevation, rainfall, optional known_risk)" } },
            "/api/v1/sessions": { "post": { "summary": "Create dashboard session" } },
            "/api/v1/sessions/{id}": { "get": { "summary": "Get session snapshot" } },
            "/api/v1/sessions/{id}/selection": { "post": { "summary": "Select ward and resolve its risk" } },
            "/api/v1/sessions/{id}/rainfall": { "put": { "summary": "Re-resolve with simulated rainfall (0-100 mm)" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } },
            "/ws/feed": { "get": { "summary": "WebSocket live feed of risk changes" } }
        }
    }))
}
