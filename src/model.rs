//! Data models for the flight lookup service
//!
//! This module defines all the data structures used throughout the application:
//! the persisted flight record, the create/update payload, query parameters,
//! and the request/response shapes for the status-check and search-agent APIs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Represents a flight record stored in the database
///
/// This structure contains all information about a single flight including:
/// - The store-assigned numeric identifier
/// - Airline and flight number
/// - Route (origin/destination airport codes)
/// - Departure and arrival times (zone-less wall-clock datetimes)
/// - Seat availability, price and a free-text status label
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Flight {
    /// Unique identifier, assigned by the store on insert
    pub id: u64,

    /// Name of the operating airline (e.g., "United Airlines")
    /// Optional - a record can exist without an airline name
    pub airline_name: Option<String>,

    /// Flight number (e.g., "UA123")
    /// The format is only enforced on the status-check request path,
    /// so stored records may carry any string here
    pub flight_number: String,

    /// Departure airport code (e.g., "JFK")
    pub origin: String,

    /// Arrival airport code (e.g., "LAX")
    pub destination: String,

    /// Scheduled departure time
    pub departure_time: NaiveDateTime,

    /// Scheduled arrival time
    pub arrival_time: NaiveDateTime,

    /// Number of seats still available
    pub available_seats: u32,

    /// Ticket price in USD
    pub price: f64,

    /// Free-text status label (sample data uses "SCHEDULED" and "DELAYED")
    pub status: String,
}

/// Payload for creating or updating a flight
///
/// Carries every flight attribute except the store-assigned id. On create the
/// `id` field must be absent; on update the path id wins and every other field
/// overwrites the stored record (partial updates are not supported).
///
/// # Example
/// ```json
/// {
///   "airline_name": "United Airlines",
///   "flight_number": "UA123",
///   "origin": "JFK",
///   "destination": "LAX",
///   "departure_time": "2025-09-10T08:00:00",
///   "arrival_time": "2025-09-10T14:30:00",
///   "available_seats": 150,
///   "price": 350.0,
///   "status": "SCHEDULED"
/// }
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct FlightUpsert {
    /// Must not be set on create requests; ignored on update (path id wins)
    pub id: Option<u64>,

    pub airline_name: Option<String>,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub available_seats: u32,
    pub price: f64,
    pub status: String,
}

/// Query parameters for the route search endpoint
///
/// # Example
/// Query string: `?origin=JFK&destination=LAX&date=2025-09-10T00:00:00`
#[derive(Deserialize)]
pub struct SearchParams {
    /// Departure airport code, matched exactly against stored records
    pub origin: String,

    /// Arrival airport code, matched exactly against stored records
    pub destination: String,

    /// Optional point-in-time filter
    /// When present, only flights departing on the same calendar day match;
    /// when absent, flights from any date are returned
    pub date: Option<NaiveDateTime>,
}

/// Request payload for the status-check endpoint
///
/// The flight number must match `^[A-Z]{2,3}\d{1,4}[A-Z]?$` (e.g., "AA123" or
/// "DL4567") and the date is required; both are enforced at the HTTP boundary.
#[derive(Deserialize)]
pub struct FlightStatusRequest {
    pub flight_number: String,

    /// Date and time to check flight status (e.g., "2025-09-10T10:30:00")
    pub date: NaiveDateTime,
}

/// Response returned by the status-check endpoint
///
/// `status` describes the lookup operation itself, not the flights: it is
/// "Success" whenever at least one record matched, even if every matched
/// flight is cancelled or delayed.
#[derive(Serialize, Deserialize, Debug)]
pub struct FlightStatusResponse {
    /// "Success" or "Error"
    pub status: String,

    /// Descriptive message about the status check result
    pub message: String,

    /// One entry per matching flight, in store return order
    pub flights: Vec<FlightStatus>,
}

/// Derived status information for a single flight
#[derive(Serialize, Deserialize, Debug)]
pub struct FlightStatus {
    /// Airline name, or "Unknown Airline" when the record has none
    pub airline_name: String,

    pub flight_number: String,

    /// Departure time in 12-hour format (e.g., "08:00 AM")
    pub departure_time: String,

    /// Departure date in YYYY-MM-DD format (e.g., "2025-09-10")
    pub departure_date: String,

    /// Arrival time in 12-hour format (e.g., "02:30 PM")
    pub arrival_time: String,

    /// The raw stored status label
    pub status: String,

    /// Computed flight duration (e.g., "6h 30m")
    pub duration: String,

    /// Layover information; always "None" (no layover model exists)
    pub layovers: String,

    /// Delay duration, present only when the stored status is exactly "Delayed"
    pub delay: Option<String>,
}

/// Request payload for the mock search-agent endpoint
///
/// `passengers` and `class_of_service` carry explicit defaults so a minimal
/// request only needs origin, destination and departure date.
#[derive(Deserialize)]
pub struct FlightSearchRequest {
    /// Departure airport code (e.g., "JFK")
    pub origin: String,

    /// Arrival airport code (e.g., "LHR")
    pub destination: String,

    /// Date of departure in YYYY-MM-DD format
    pub departure_date: String,

    /// Number of passengers (defaults to 1)
    #[serde(default = "default_passengers")]
    pub passengers: u32,

    /// Optional airline name filter, matched case-insensitively
    pub airline: Option<String>,

    /// Class of service (defaults to "economy")
    #[serde(default = "default_class_of_service")]
    pub class_of_service: String,
}

fn default_passengers() -> u32 {
    1
}

fn default_class_of_service() -> String {
    "economy".to_string()
}

/// Response returned by the mock search-agent endpoint
#[derive(Serialize, Deserialize, Debug)]
pub struct FlightSearchResponse {
    /// "Success" or "NoResults"
    pub status: String,

    /// Descriptive message about the search result
    pub message: String,

    /// List of available flights (may be empty)
    pub flights: Vec<FlightDetails>,
}

/// Details of a single flight in a search-agent result
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FlightDetails {
    pub airline_name: String,
    pub flight_number: String,

    /// Departure time in 12-hour format (e.g., "08:00 AM")
    pub departure_time: String,

    /// Arrival time in 12-hour format (e.g., "04:30 PM")
    pub arrival_time: String,

    /// Ticket price in USD
    pub price: f64,

    /// Total flight duration (e.g., "8h 30m")
    pub duration: String,

    /// Layover information (e.g., "None" or "1 (JFK)")
    pub layovers: String,
}
