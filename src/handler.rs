//! HTTP request handlers for the flight lookup API
//!
//! This module wires the HTTP boundary to the core logic:
//! - CRUD operations over stored flights
//! - Route search with an optional date filter
//! - Status lookup by flight number and date
//! - The mock search-agent endpoint
//!
//! Request validation (pre-set id on create, flight-number format, blank
//! search-agent fields) happens here; the core modules never see invalid
//! shapes for these fields.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::agent::mock_search;
use crate::database::AppState;
use crate::model::{FlightSearchRequest, FlightStatusRequest, FlightUpsert, SearchParams};
use crate::query::{search_by_flight_number, search_by_route};
use crate::report::build_status_report;

/// Accepted flight number shape: 2-3 uppercase letters, 1-4 digits, optional
/// trailing letter (e.g., "AA123", "DL4567", "BAW12A")
static FLIGHT_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,3}\d{1,4}[A-Z]?$").unwrap());

/// Searches flights by route with an optional same-day filter
///
/// # Query Parameters
///
/// - `origin` (required) - Departure airport code
/// - `destination` (required) - Arrival airport code
/// - `date` (optional) - Restricts results to departures on this calendar day
///
/// # Example Request
///
/// `GET /api/flights/search?origin=JFK&destination=LAX&date=2025-09-10T00:00:00`
///
/// # Response
///
/// - **200 OK** - JSON array of matching flights (possibly empty)
pub async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let flights =
        search_by_route(&state.store, &params.origin, &params.destination, params.date).unwrap();

    Json(flights)
}

/// Returns every stored flight
///
/// # Response
///
/// - **200 OK** - JSON array of all flights
pub async fn get_all_flights(State(state): State<AppState>) -> impl IntoResponse {
    let flights = state.store.find_all().unwrap();

    Json(flights)
}

/// Returns a single flight by id
///
/// # Response
///
/// - **200 OK** - The flight record
/// - **404 Not Found** - No flight with this id
pub async fn get_flight_by_id(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.store.find_by_id(id).unwrap() {
        Some(flight) => Json(flight).into_response(),
        None => not_found(id),
    }
}

/// Creates a new flight
///
/// The id is assigned by the store; a payload that already carries one is
/// rejected before any store interaction. Flight-number format is NOT
/// validated here - records may exist with any flight-number string.
///
/// # Response
///
/// - **201 Created** - The stored record, including its assigned id
/// - **400 Bad Request** - Payload carried a pre-set id
pub async fn create_flight(
    State(state): State<AppState>,
    Json(payload): Json<FlightUpsert>,
) -> impl IntoResponse {
    if payload.id.is_some() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "A new flight cannot already have an ID",
                "code": "bad_request"
            })),
        )
            .into_response();
    }

    let flight = state.store.insert(payload).unwrap();

    (StatusCode::CREATED, Json(flight)).into_response()
}

/// Replaces an existing flight
///
/// Full-overwrite semantics: every field is copied from the incoming payload,
/// including fields the caller may not have intended to change. Partial
/// updates are not supported.
///
/// # Response
///
/// - **200 OK** - The updated record
/// - **404 Not Found** - No flight with this id; nothing is created
pub async fn update_flight(
    Path(id): Path<u64>,
    State(state): State<AppState>,
    Json(payload): Json<FlightUpsert>,
) -> impl IntoResponse {
    match state.store.update(id, payload).unwrap() {
        Some(flight) => Json(flight).into_response(),
        None => not_found(id),
    }
}

/// Deletes a flight by id
///
/// # Response
///
/// - **204 No Content** - Flight deleted
/// - **404 Not Found** - No flight with this id
pub async fn delete_flight(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    if state.store.delete(id).unwrap() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(id)
    }
}

/// Checks the status of a flight by number and date
///
/// Validates the flight-number format, runs the date-windowed query, and
/// builds the derived status report. A report with no matching flights is an
/// ordinary "Error" report value, mapped here to a 404.
///
/// # Request Body
///
/// ```json
/// {
///   "flight_number": "AA123",
///   "date": "2025-09-10T10:30:00"
/// }
/// ```
///
/// # Response
///
/// - **200 OK** - "Success" report with one entry per matching flight
/// - **400 Bad Request** - Malformed flight number
/// - **404 Not Found** - "Error" report, no flights matched
pub async fn check_flight_status(
    State(state): State<AppState>,
    Json(request): Json<FlightStatusRequest>,
) -> impl IntoResponse {
    if !FLIGHT_NUMBER_RE.is_match(&request.flight_number) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Invalid flight number format. Example: AA123 or DL4567",
                "code": "bad_request"
            })),
        )
            .into_response();
    }

    let flights =
        search_by_flight_number(&state.store, &request.flight_number, Some(request.date)).unwrap();

    let report = build_status_report(flights);
    if report.status == "Error" {
        return (StatusCode::NOT_FOUND, Json(report)).into_response();
    }

    Json(report).into_response()
}

/// Runs the mock search agent
///
/// Independent of the persisted data; see [`crate::agent::mock_search`] for
/// the canned scenarios.
///
/// # Response
///
/// - **200 OK** - "Success" or "NoResults" search result
/// - **400 Bad Request** - Blank origin, destination, or departure date
pub async fn search_agent(Json(request): Json<FlightSearchRequest>) -> impl IntoResponse {
    if request.origin.is_empty()
        || request.destination.is_empty()
        || request.departure_date.is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Origin, destination and departure date are required",
                "code": "bad_request"
            })),
        )
            .into_response();
    }

    Json(mock_search(&request)).into_response()
}

/// Shared 404 body for id-based lookups
fn not_found(id: u64) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": format!("Flight not found with id: {}", id),
            "code": "not_found"
        })),
    )
        .into_response()
}
