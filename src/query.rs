//! Flight query logic
//!
//! Resolves search criteria to the appropriate store lookup: an exact match
//! when no date is given, or a date-windowed match otherwise.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::model::Flight;
use crate::store::FlightStore;

/// Computes the half-open one-day window `[start-of-day, start-of-next-day)`
/// containing the given instant
///
/// Used to turn an "on this date" filter into a range filter over departure
/// times, since exact-timestamp equality is never the intended semantic.
pub fn date_window(at: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let start = at.date().and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}

/// Searches flights by origin and destination, optionally restricted to the
/// calendar day of `date`
///
/// Without a date this delegates to the store's unfiltered route lookup and
/// may return flights from any date. An empty result is a valid outcome, not
/// an error.
pub fn search_by_route(
    store: &FlightStore,
    origin: &str,
    destination: &str,
    date: Option<NaiveDateTime>,
) -> Result<Vec<Flight>, redb::Error> {
    match date {
        None => store.find_by_route(origin, destination),
        Some(date) => {
            let (start, end) = date_window(date);
            store.find_by_route_in_window(origin, destination, start, end)
        }
    }
}

/// Searches flights by flight number, optionally restricted to the calendar
/// day of `date`
///
/// Same two-branch policy as [`search_by_route`], keyed on flight number.
pub fn search_by_flight_number(
    store: &FlightStore,
    number: &str,
    date: Option<NaiveDateTime>,
) -> Result<Vec<Flight>, redb::Error> {
    match date {
        None => store.find_by_flight_number(number),
        Some(date) => {
            let (start, end) = date_window(date);
            store.find_by_flight_number_in_window(number, start, end)
        }
    }
}
