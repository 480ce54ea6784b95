//! Route definitions for the flight lookup API
//!
//! This module configures all HTTP routes and maps them to their respective
//! handlers. `/search` carries both the persisted route search (GET) and the
//! mock search agent (POST).

use axum::routing::{get, post};
use axum::Router;

use crate::database::AppState;
use crate::handler::{
    check_flight_status, create_flight, delete_flight, get_all_flights, get_flight_by_id,
    search_agent, search_flights, update_flight,
};

/// Creates and configures the Axum application router with all routes
///
/// # Route Definitions
///
/// - `GET /api/flights` - Lists all flights
/// - `POST /api/flights` - Creates a new flight
/// - `GET /api/flights/search` - Searches flights by route and optional date
/// - `POST /api/flights/search` - Mock search agent over canned data
/// - `POST /api/flights/status` - Status lookup by flight number and date
/// - `GET /api/flights/{id}` - Fetches a flight by id
/// - `PUT /api/flights/{id}` - Replaces a flight (full overwrite)
/// - `DELETE /api/flights/{id}` - Deletes a flight
///
/// # Arguments
///
/// * `state` - Application state containing the shared flight store
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/flights", get(get_all_flights).post(create_flight))
        .route("/api/flights/search", get(search_flights).post(search_agent))
        .route("/api/flights/status", post(check_flight_status))
        .route(
            "/api/flights/{id}",
            get(get_flight_by_id).put(update_flight).delete(delete_flight),
        )
        .with_state(state)
}
