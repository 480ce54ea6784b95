//! Status report construction
//!
//! Turns the flights matched by a status-check query into the user-facing
//! response shape: formatted times, computed duration, and default values
//! for fields the data model does not carry.

use chrono::Duration;

use crate::model::{Flight, FlightStatus, FlightStatusResponse};

/// Builds a status report from the flights matched by a status-check query
///
/// An empty input yields an "Error" report with the message "Flight not
/// found." - a normal return value the boundary maps to a not-found response,
/// not a fault. A non-empty input always yields a "Success" report, regardless
/// of the operational status of the individual flights: the report status
/// describes the lookup, not the flights.
pub fn build_status_report(flights: Vec<Flight>) -> FlightStatusResponse {
    if flights.is_empty() {
        return FlightStatusResponse {
            status: "Error".to_string(),
            message: "Flight not found.".to_string(),
            flights: Vec::new(),
        };
    }

    let statuses = flights.into_iter().map(flight_status).collect();

    FlightStatusResponse {
        status: "Success".to_string(),
        message: "Flight status retrieved successfully.".to_string(),
        flights: statuses,
    }
}

/// Derives the per-flight status entry from a stored record
fn flight_status(flight: Flight) -> FlightStatus {
    // The delay annotation only applies to the exact label "Delayed";
    // the seeded "DELAYED" deliberately does not match
    let delay = if flight.status == "Delayed" {
        Some("30 min".to_string())
    } else {
        None
    };

    FlightStatus {
        airline_name: flight
            .airline_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Unknown Airline".to_string()),
        flight_number: flight.flight_number,
        departure_time: flight.departure_time.format("%I:%M %p").to_string(),
        departure_date: flight.departure_time.date().to_string(),
        arrival_time: flight.arrival_time.format("%I:%M %p").to_string(),
        status: flight.status,
        duration: format_duration(flight.arrival_time - flight.departure_time),
        // No layover model exists
        layovers: "None".to_string(),
        delay,
    }
}

/// Renders a duration as "{hours}h {minutes:02}m" (e.g., "6h 30m")
///
/// Negative deltas (arrival before departure) are passed through unclamped.
fn format_duration(delta: Duration) -> String {
    let hours = delta.num_hours();
    let minutes = (delta - Duration::hours(hours)).num_minutes();
    format!("{}h {:02}m", hours, minutes)
}
