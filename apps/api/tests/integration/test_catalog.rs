use super::helpers::{expect_status, get, read_json, read_text, spawn_app};
use axum::http::{StatusCode, header};
use serde_json::Value;

#[tokio::test]
async fn health_reports_version_and_request_id() {
    let app = spawn_app();
    let res = expect_status(get(&app.app, "/health").await, StatusCode::OK).await;
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(
        body["providers"]["elevation_base_url"],
        "https://api.open-elevation.com"
    );
    assert_eq!(body["providers"]["openweather_key_configured"], false);
}

#[tokio::test]
async fn lists_mangalore_with_map_settings() {
    let app = spawn_app();
    let cities: Value =
        read_json(expect_status(get(&app.app, "/api/v1/cities").await, StatusCode::OK).await).await;
    assert_eq!(cities.as_array().map(Vec::len), Some(1));

    let city: Value = read_json(
        expect_status(get(&app.app, "/api/v1/cities/Mangalore").await, StatusCode::OK).await,
    )
    .await;
    assert_eq!(city["id"], "mangalore");
    assert_eq!(city["default_zoom"], 15);
    assert_eq!(city["center"]["lat"], 12.871138);
}

#[tokio::test]
async fn unknown_city_is_not_found() {
    let app = spawn_app();
    let res = expect_status(
        get(&app.app, "/api/v1/cities/udupi/wards").await,
        StatusCode::NOT_FOUND,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "No ward data available for city: udupi");
}

#[tokio::test]
async fn ward_markers_are_coloured_by_known_risk() {
    let app = spawn_app();
    let markers: Value = read_json(
        expect_status(
            get(&app.app, "/api/v1/cities/mangalore/wards").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    let markers = markers.as_array().expect("markers array");
    assert_eq!(markers.len(), 6);

    let by_id = |id: &str| {
        markers
            .iter()
            .find(|m| m["ward"]["id"] == id)
            .unwrap_or_else(|| panic!("missing marker {}", id))
    };
    assert_eq!(by_id("pumpwell")["color"], "#d62728");
    assert_eq!(by_id("kadri")["marker_risk"], "High");
    assert_eq!(by_id("hampankatte")["glyph"], "●");
    assert_eq!(by_id("kulshekar")["marker_risk"], Value::Null);
    assert_eq!(by_id("kulshekar")["color"], "#888888");
}

#[tokio::test]
async fn ward_lookup() {
    let app = spawn_app();
    let ward: Value = read_json(
        expect_status(get(&app.app, "/api/v1/wards/kadri").await, StatusCode::OK).await,
    )
    .await;
    assert_eq!(ward["name"], "Kadri");
    assert_eq!(ward["known_risk"], "High");

    expect_status(
        get(&app.app, "/api/v1/wards/bejai").await,
        StatusCode::NOT_FOUND,
    )
    .await;
    expect_status(
        get(&app.app, "/api/v1/wards/not_a_slug!").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[tokio::test]
async fn legend_is_ordered_by_severity() {
    let app = spawn_app();
    let legend: Value =
        read_json(expect_status(get(&app.app, "/api/v1/legend").await, StatusCode::OK).await).await;
    let levels: Vec<_> = legend
        .as_array()
        .expect("legend array")
        .iter()
        .map(|e| e["level"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(levels, ["Safe", "Low", "Medium", "High", "Critical"]);
}

#[tokio::test]
async fn classify_computes_from_elevation_and_rainfall() {
    let app = spawn_app();
    let body: Value = read_json(
        expect_status(
            get(&app.app, "/api/v1/risk/classify?elevation=3&rainfall=60").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    assert_eq!(body["base_risk"], "High");
    assert_eq!(body["current_risk"], "Critical");
    assert_eq!(body["color"], "#d62728");
    assert_eq!(body["interpretation"]["headline"], "Critical Risk");

    let body: Value = read_json(
        expect_status(
            get(&app.app, "/api/v1/risk/classify?elevation=12&rainfall=25").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    assert_eq!(body["base_risk"], "Low");
    assert_eq!(body["current_risk"], "Low");
}

#[tokio::test]
async fn classify_applies_known_risk_precedence() {
    let app = spawn_app();
    let dry: Value = read_json(
        expect_status(
            get(
                &app.app,
                "/api/v1/risk/classify?elevation=2&rainfall=0&known_risk=critical",
            )
            .await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    assert_eq!(dry["current_risk"], "Safe");
    assert_eq!(dry["interpretation"]["headline"], "No Current Risk");

    let drizzle: Value = read_json(
        expect_status(
            get(
                &app.app,
                "/api/v1/risk/classify?elevation=40&rainfall=1&known_risk=Critical",
            )
            .await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    assert_eq!(drizzle["base_risk"], "Critical");
    assert_eq!(drizzle["current_risk"], "Critical");
}

#[tokio::test]
async fn classify_rejects_bad_input() {
    let app = spawn_app();
    let res = expect_status(
        get(&app.app, "/api/v1/risk/classify?elevation=3&rainfall=-1").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    let body: Value = read_json(res).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("rainfall"));

    expect_status(
        get(
            &app.app,
            "/api/v1/risk/classify?elevation=3&rainfall=30&known_risk=flooded",
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    expect_status(
        get(&app.app, "/api/v1/risk/classify?rainfall=30").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[tokio::test]
async fn dashboard_assets_are_served() {
    let app = spawn_app();
    let page = read_text(expect_status(get(&app.app, "/").await, StatusCode::OK).await).await;
    assert!(page.contains("Waterlogging Risk Dashboard"));

    let script = expect_status(get(&app.app, "/app.js").await, StatusCode::OK).await;
    assert_eq!(
        script.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=utf-8"
    );
    let script = read_text(script).await;
    assert!(script.contains("setMaxBounds"));
    assert!(script.contains("city.bounds.south_west"));
    let styles = expect_status(get(&app.app, "/styles.css").await, StatusCode::OK).await;
    assert_eq!(styles.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
}
