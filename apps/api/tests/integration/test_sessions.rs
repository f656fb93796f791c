use super::helpers::{
    BALMATTA, FakeElevation, FakeWeather, KADRI, create_session, expect_status, get, read_json,
    send_json, spawn_app, spawn_app_with,
};
use axum::http::StatusCode;
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use tokio::sync::Notify;
use waterlog_api::{
    application::assess_ward::dto::SelectionResponse, domain::risk::level::RiskLevel,
};

#[tokio::test]
async fn new_session_starts_safe() {
    let app = spawn_app();
    let id = create_session(&app.app).await;

    let snapshot: Value = read_json(
        expect_status(
            get(&app.app, &format!("/api/v1/sessions/{}", id)).await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    assert_eq!(snapshot["current_displayed_risk"], "Safe");
    assert_eq!(snapshot["selected_ward_id"], Value::Null);
    assert_eq!(snapshot["pending"], false);
}

#[tokio::test]
async fn session_lookup_errors() {
    let app = spawn_app();
    expect_status(
        get(&app.app, "/api/v1/sessions/not-a-uuid").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    expect_status(
        get(
            &app.app,
            "/api/v1/sessions/0194f123-4567-7abc-8def-0123456789ab",
        )
        .await,
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[tokio::test]
async fn selecting_a_ward_resolves_its_risk() {
    let mut app = spawn_app();
    let id = create_session(&app.app).await;

    let res = send_json(
        &app.app,
        "POST",
        &format!("/api/v1/sessions/{}/selection", id),
        json!({ "ward_id": "balmatta" }),
    )
    .await;
    let detail: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(detail["status"], "applied");
    assert_eq!(detail["ward"]["name"], "Balmatta");
    assert_eq!(detail["actual_rainfall_mm"], 60.0);
    assert_eq!(detail["sample"]["elevation_meters"], 3.0);
    assert_eq!(detail["assessment"]["base_risk"], "High");
    assert_eq!(detail["assessment"]["current_risk"], "Critical");
    assert_eq!(detail["forecast"].as_array().map(Vec::len), Some(3));
    assert_eq!(detail["forecast"][1]["rain_mm"], 3.0);
    assert_eq!(detail["history"].as_array().map(Vec::len), Some(3));

    let feed: Value = serde_json::from_str(&app.feed.recv().await.expect("feed message"))
        .expect("feed json");
    assert_eq!(feed["type"], "risk_changed");
    assert_eq!(feed["session_id"], id.as_str());
    assert_eq!(feed["current_risk"], "Critical");

    let snapshot: Value = read_json(
        get(&app.app, &format!("/api/v1/sessions/{}", id)).await,
    )
    .await;
    assert_eq!(snapshot["selected_ward_id"], "balmatta");
    assert_eq!(snapshot["current_displayed_risk"], "Critical");
}

#[tokio::test]
async fn rainfall_slider_reuses_cached_elevation() {
    let app = spawn_app();
    let id = create_session(&app.app).await;
    let select = send_json(
        &app.app,
        "POST",
        &format!("/api/v1/sessions/{}/selection", id),
        json!({ "ward_id": "balmatta" }),
    )
    .await;
    expect_status(select, StatusCode::OK).await;
    assert_eq!(app.elevation.calls(), 1);

    for (rainfall, expected) in [(35.0, "High"), (10.5, "Safe"), (0.0, "Safe"), (100.0, "Critical")] {
        let res = send_json(
            &app.app,
            "PUT",
            &format!("/api/v1/sessions/{}/rainfall", id),
            json!({ "rainfall_mm": rainfall }),
        )
        .await;
        let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
        assert_eq!(body["assessment"]["current_risk"], expected, "at {} mm", rainfall);
        assert_eq!(body["sample"]["elevation_meters"], 3.0);
    }
    assert_eq!(app.elevation.calls(), 1);
}

#[tokio::test]
async fn rainfall_requests_are_validated() {
    let app = spawn_app();
    let id = create_session(&app.app).await;

    let early = send_json(
        &app.app,
        "PUT",
        &format!("/api/v1/sessions/{}/rainfall", id),
        json!({ "rainfall_mm": 30.0 }),
    )
    .await;
    expect_status(early, StatusCode::BAD_REQUEST).await;

    let out_of_range = send_json(
        &app.app,
        "PUT",
        &format!("/api/v1/sessions/{}/rainfall", id),
        json!({ "rainfall_mm": 140.0 }),
    )
    .await;
    let body: Value = read_json(expect_status(out_of_range, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["error"], "rainfall_mm must be between 0 and 100");
}

#[tokio::test]
async fn unknown_or_malformed_ward_selection() {
    let app = spawn_app();
    let id = create_session(&app.app).await;
    let uri = format!("/api/v1/sessions/{}/selection", id);

    let missing = send_json(&app.app, "POST", &uri, json!({ "ward_id": "bejai" })).await;
    let body: Value = read_json(expect_status(missing, StatusCode::NOT_FOUND).await).await;
    assert_eq!(body["error"], "Ward not found: bejai");

    let malformed = send_json(&app.app, "POST", &uri, json!({ "ward_id": "Kadri Ward" })).await;
    expect_status(malformed, StatusCode::BAD_REQUEST).await;
    assert_eq!(app.elevation.calls(), 0);
}

#[tokio::test]
async fn ward_selection_ignores_case_like_catalog_lookups() {
    let app = spawn_app();
    let id = create_session(&app.app).await;

    let res = send_json(
        &app.app,
        "POST",
        &format!("/api/v1/sessions/{}/selection", id),
        json!({ "ward_id": " Pumpwell " }),
    )
    .await;
    let detail: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(detail["status"], "applied");
    assert_eq!(detail["ward"]["id"], "pumpwell");
    assert_eq!(detail["assessment"]["current_risk"], "Critical");

    let snapshot: Value = read_json(get(&app.app, &format!("/api/v1/sessions/{}", id)).await).await;
    assert_eq!(snapshot["selected_ward_id"], "pumpwell");
}

#[tokio::test]
async fn upstream_failure_keeps_displayed_risk() {
    let app = spawn_app_with(
        FakeElevation::default().failing(),
        FakeWeather {
            rainfall_mm: 60.0,
            forecast_fails: false,
        },
    );
    let id = create_session(&app.app).await;

    let res = send_json(
        &app.app,
        "POST",
        &format!("/api/v1/sessions/{}/selection", id),
        json!({ "ward_id": "kadri" }),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::SERVICE_UNAVAILABLE).await).await;
    assert_eq!(
        body["error"],
        "Environmental data is currently unavailable, please try again"
    );

    let snapshot: Value = read_json(get(&app.app, &format!("/api/v1/sessions/{}", id)).await).await;
    assert_eq!(snapshot["current_displayed_risk"], "Safe");
    assert_eq!(snapshot["assessment"], Value::Null);
    assert!(
        snapshot["last_error"]
            .as_str()
            .unwrap_or_default()
            .contains("timed out")
    );
}

#[tokio::test]
async fn forecast_outage_degrades_to_empty() {
    let app = spawn_app_with(
        FakeElevation::default().with(KADRI, 8.0),
        FakeWeather {
            rainfall_mm: 30.0,
            forecast_fails: true,
        },
    );
    let id = create_session(&app.app).await;

    let res = send_json(
        &app.app,
        "POST",
        &format!("/api/v1/sessions/{}/selection", id),
        json!({ "ward_id": "kadri" }),
    )
    .await;
    let detail: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(detail["forecast"], json!([]));
    assert_eq!(detail["history"].as_array().map(Vec::len), Some(3));
    // curated label wins while it rains
    assert_eq!(detail["assessment"]["current_risk"], "High");
}

#[tokio::test]
async fn last_selection_wins() {
    let release = Arc::new(Notify::new());
    let app = spawn_app_with(
        FakeElevation::default()
            .with(BALMATTA, 12.0)
            .gated(KADRI, release.clone()),
        FakeWeather {
            rainfall_mm: 25.0,
            forecast_fails: false,
        },
    );
    let (_, session) = app.sessions.create().await;

    let slow = {
        let assessments = app.assessments.clone();
        let session = session.clone();
        tokio::spawn(async move { assessments.select_ward(&session, "kadri").await })
    };
    while app.elevation.calls() == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let fast = app
        .assessments
        .select_ward(&session, "balmatta")
        .await
        .expect("balmatta selection");
    assert!(matches!(fast, SelectionResponse::Applied(_)));

    release.notify_one();
    let late = slow.await.expect("join").expect("kadri selection");
    assert!(matches!(
        late,
        SelectionResponse::Superseded { ref ward_id, .. } if ward_id == "kadri"
    ));

    let state = session.lock().await;
    assert_eq!(state.selected_ward_id(), Some("balmatta"));
    assert_eq!(state.current_displayed_risk(), RiskLevel::Low);
}
