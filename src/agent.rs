//! Mock flight search agent
//!
//! A stateless, fixture-backed search path unrelated to the persisted data,
//! used to exercise consumer behavior (e.g., an automated agent under test)
//! against deterministic canned scenarios.

use crate::model::{FlightDetails, FlightSearchRequest, FlightSearchResponse};

/// The two canned flights every non-special-cased search starts from
fn canned_flights() -> Vec<FlightDetails> {
    vec![
        FlightDetails {
            airline_name: "United Airlines".to_string(),
            flight_number: "UA123".to_string(),
            departure_time: "08:00 AM".to_string(),
            arrival_time: "04:30 PM".to_string(),
            price: 750.00,
            duration: "8h 30m".to_string(),
            layovers: "None".to_string(),
        },
        FlightDetails {
            airline_name: "American Airlines".to_string(),
            flight_number: "AA456".to_string(),
            departure_time: "10:15 AM".to_string(),
            arrival_time: "06:45 PM".to_string(),
            price: 820.00,
            duration: "8h 30m".to_string(),
            layovers: "1 (JFK)".to_string(),
        },
    ]
}

/// Performs a mock flight search over the canned fixture data
///
/// SFO to ORD (case-insensitive) always returns a "NoResults" response with an
/// empty list, regardless of every other parameter - a fixed negative-path
/// scenario for downstream consumers. Any other route returns the canned
/// flights, optionally filtered by airline name (case-insensitive). The
/// response status stays "Success" even when the filter empties the list.
pub fn mock_search(request: &FlightSearchRequest) -> FlightSearchResponse {
    // Simulate a "no results" scenario for one specific route
    if request.origin.eq_ignore_ascii_case("SFO") && request.destination.eq_ignore_ascii_case("ORD")
    {
        return FlightSearchResponse {
            status: "NoResults".to_string(),
            message: "No flights were found for the specified route and dates.".to_string(),
            flights: Vec::new(),
        };
    }

    let mut flights = canned_flights();

    // Simulate filtering by airline
    if let Some(airline) = request.airline.as_deref().filter(|a| !a.is_empty()) {
        flights.retain(|flight| flight.airline_name.eq_ignore_ascii_case(airline));
    }

    FlightSearchResponse {
        status: "Success".to_string(),
        message: "Flights found.".to_string(),
        flights,
    }
}
