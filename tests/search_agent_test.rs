//! Tests for the mock search-agent endpoint
//!
//! The agent is independent of the persisted data: a fixed SFO->ORD
//! no-results route, two canned flights, and a case-insensitive airline
//! filter.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tower::ServiceExt;

use flightdeck::database::{init_db, AppState};
use flightdeck::model::FlightSearchRequest;
use flightdeck::route::create_app;
use flightdeck::store::FlightStore;

/// Helper function to create a test application with a temporary database
fn setup_test_app() -> (axum::Router, NamedTempFile) {
    let temp_db = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_db.path().to_str().unwrap();

    let db = init_db(db_path).expect("Failed to initialize test database");
    let state = AppState {
        store: FlightStore::new(Arc::new(db)),
    };

    (create_app(state), temp_db)
}

/// Helper function to parse response body as JSON
async fn response_json(body: Body) -> Value {
    let bytes = body
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

/// Helper function to POST a search-agent request
async fn search(app: axum::Router, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/flights/search")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, response_json(response.into_body()).await)
}

#[tokio::test]
async fn test_sfo_to_ord_returns_no_results() {
    let (app, _temp_db) = setup_test_app();

    let (status, body) = search(
        app,
        json!({
            "origin": "SFO",
            "destination": "ORD",
            "departure_date": "2025-09-15"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "NoResults");
    assert_eq!(
        body["message"],
        "No flights were found for the specified route and dates."
    );
    assert_eq!(body["flights"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_sfo_to_ord_is_case_insensitive() {
    let (app, _temp_db) = setup_test_app();

    let (status, body) = search(
        app,
        json!({
            "origin": "sfo",
            "destination": "ord",
            "departure_date": "2025-09-15"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "NoResults");
}

#[tokio::test]
async fn test_sfo_to_ord_ignores_airline_filter() {
    let (app, _temp_db) = setup_test_app();

    // The no-results route wins over every other parameter
    let (_, body) = search(
        app,
        json!({
            "origin": "SFO",
            "destination": "ORD",
            "departure_date": "2025-09-15",
            "airline": "United Airlines",
            "passengers": 4
        }),
    )
    .await;

    assert_eq!(body["status"], "NoResults");
    assert_eq!(body["flights"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_default_route_returns_canned_flights() {
    let (app, _temp_db) = setup_test_app();

    let (status, body) = search(
        app,
        json!({
            "origin": "JFK",
            "destination": "LAX",
            "departure_date": "2025-09-15"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Success");
    assert_eq!(body["message"], "Flights found.");

    let flights = body["flights"].as_array().unwrap();
    assert_eq!(flights.len(), 2);

    assert_eq!(flights[0]["airline_name"], "United Airlines");
    assert_eq!(flights[0]["flight_number"], "UA123");
    assert_eq!(flights[0]["departure_time"], "08:00 AM");
    assert_eq!(flights[0]["arrival_time"], "04:30 PM");
    assert_eq!(flights[0]["price"], 750.00);
    assert_eq!(flights[0]["duration"], "8h 30m");
    assert_eq!(flights[0]["layovers"], "None");

    assert_eq!(flights[1]["airline_name"], "American Airlines");
    assert_eq!(flights[1]["flight_number"], "AA456");
    assert_eq!(flights[1]["layovers"], "1 (JFK)");
}

#[tokio::test]
async fn test_airline_filter_keeps_matching_entry() {
    let (app, _temp_db) = setup_test_app();

    let (_, body) = search(
        app,
        json!({
            "origin": "JFK",
            "destination": "LAX",
            "departure_date": "2025-09-15",
            "airline": "United Airlines"
        }),
    )
    .await;

    let flights = body["flights"].as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0]["flight_number"], "UA123");
}

#[tokio::test]
async fn test_airline_filter_is_case_insensitive() {
    let (app, _temp_db) = setup_test_app();

    let (_, body) = search(
        app,
        json!({
            "origin": "JFK",
            "destination": "LAX",
            "departure_date": "2025-09-15",
            "airline": "american airlines"
        }),
    )
    .await;

    let flights = body["flights"].as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0]["flight_number"], "AA456");
}

#[tokio::test]
async fn test_airline_filter_with_no_match_still_succeeds() {
    let (app, _temp_db) = setup_test_app();

    // An airline absent from the canned list empties the result but the
    // status stays "Success"; only SFO->ORD yields "NoResults"
    let (status, body) = search(
        app,
        json!({
            "origin": "JFK",
            "destination": "LAX",
            "departure_date": "2025-09-15",
            "airline": "Delta Air Lines"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Success");
    assert_eq!(body["flights"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_blank_fields_rejected() {
    let (app, _temp_db) = setup_test_app();

    let (status, body) = search(
        app,
        json!({
            "origin": "",
            "destination": "LAX",
            "departure_date": "2025-09-15"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");
}

#[test]
fn test_request_defaults() {
    // passengers and class_of_service carry explicit serde defaults
    let request: FlightSearchRequest = serde_json::from_value(json!({
        "origin": "JFK",
        "destination": "LAX",
        "departure_date": "2025-09-15"
    }))
    .unwrap();

    assert_eq!(request.passengers, 1);
    assert_eq!(request.class_of_service, "economy");
    assert!(request.airline.is_none());
}
