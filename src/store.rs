//! Flight persistence over the embedded redb database
//!
//! This module implements every store operation the rest of the application
//! consumes: id-based lookup, route and flight-number queries (with and
//! without a departure-time window), insert with id assignment, full-overwrite
//! update, and deletion.

use std::sync::Arc;

use chrono::NaiveDateTime;
use redb::{Database, ReadableDatabase, ReadableTable};

use crate::database::TABLE_FLIGHTS;
use crate::model::{Flight, FlightUpsert};

/// Handle to the flight table
///
/// Cheap to clone; all methods open their own transaction, so the store can be
/// shared freely across handlers.
#[derive(Clone)]
pub struct FlightStore {
    db: Arc<Database>,
}

impl FlightStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Looks up a single flight by its id
    pub fn find_by_id(&self, id: u64) -> Result<Option<Flight>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TABLE_FLIGHTS)?;

        Ok(table
            .get(id)?
            .and_then(|guard| serde_json::from_str(guard.value()).ok()))
    }

    /// Returns all stored flights in id order
    pub fn find_all(&self) -> Result<Vec<Flight>, redb::Error> {
        self.scan(|_| true)
    }

    /// Returns flights matching the given route exactly, from any date
    ///
    /// No case folding is applied; airport codes are matched byte-for-byte.
    pub fn find_by_route(&self, origin: &str, destination: &str) -> Result<Vec<Flight>, redb::Error> {
        self.scan(|flight| flight.origin == origin && flight.destination == destination)
    }

    /// Returns flights matching the given route whose departure time falls in
    /// the half-open range `start <= departure_time < end`
    pub fn find_by_route_in_window(
        &self,
        origin: &str,
        destination: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Flight>, redb::Error> {
        self.scan(|flight| {
            flight.origin == origin
                && flight.destination == destination
                && flight.departure_time >= start
                && flight.departure_time < end
        })
    }

    /// Returns flights with the given flight number, from any date
    pub fn find_by_flight_number(&self, number: &str) -> Result<Vec<Flight>, redb::Error> {
        self.scan(|flight| flight.flight_number == number)
    }

    /// Returns flights with the given flight number whose departure time falls
    /// in the half-open range `start <= departure_time < end`
    pub fn find_by_flight_number_in_window(
        &self,
        number: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Flight>, redb::Error> {
        self.scan(|flight| {
            flight.flight_number == number
                && flight.departure_time >= start
                && flight.departure_time < end
        })
    }

    /// Iterates the whole table and keeps the records matching the predicate
    ///
    /// The table is small enough that a scan beats maintaining secondary
    /// indexes for every query shape.
    fn scan<F>(&self, keep: F) -> Result<Vec<Flight>, redb::Error>
    where
        F: Fn(&Flight) -> bool,
    {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TABLE_FLIGHTS)?;

        let flights = table
            .iter()?
            .filter_map(|res| {
                // Handle potential errors and deserialize the JSON records
                res.ok()
                    .and_then(|(_, value)| serde_json::from_str::<Flight>(value.value()).ok())
            })
            .filter(|flight| keep(flight))
            .collect();

        Ok(flights)
    }

    /// Inserts a new flight and assigns it the next free id
    ///
    /// The caller is responsible for rejecting payloads that already carry an
    /// id; this method ignores `payload.id` entirely.
    pub fn insert(&self, payload: FlightUpsert) -> Result<Flight, redb::Error> {
        let write_txn = self.db.begin_write()?;
        let flight;
        {
            let mut table = write_txn.open_table(TABLE_FLIGHTS)?;

            // Next id = highest existing id + 1, starting from 1
            let next_id = table.last()?.map(|(key, _)| key.value() + 1).unwrap_or(1);

            flight = Flight {
                id: next_id,
                airline_name: payload.airline_name,
                flight_number: payload.flight_number,
                origin: payload.origin,
                destination: payload.destination,
                departure_time: payload.departure_time,
                arrival_time: payload.arrival_time,
                available_seats: payload.available_seats,
                price: payload.price,
                status: payload.status,
            };

            let record_json = serde_json::to_string(&flight).unwrap();
            table.insert(next_id, record_json.as_str())?;
        }

        // Commit the transaction to persist the data
        write_txn.commit()?;

        Ok(flight)
    }

    /// Overwrites an existing flight with the incoming payload
    ///
    /// Every attribute is replaced by the payload's value; only the id is kept.
    /// Returns `None` when the id does not exist, and nothing is created.
    pub fn update(&self, id: u64, payload: FlightUpsert) -> Result<Option<Flight>, redb::Error> {
        let write_txn = self.db.begin_write()?;
        let updated;
        {
            let mut table = write_txn.open_table(TABLE_FLIGHTS)?;

            if table.get(id)?.is_none() {
                // No record to update; drop the transaction without committing
                return Ok(None);
            }

            updated = Flight {
                id,
                airline_name: payload.airline_name,
                flight_number: payload.flight_number,
                origin: payload.origin,
                destination: payload.destination,
                departure_time: payload.departure_time,
                arrival_time: payload.arrival_time,
                available_seats: payload.available_seats,
                price: payload.price,
                status: payload.status,
            };

            let record_json = serde_json::to_string(&updated).unwrap();
            table.insert(id, record_json.as_str())?;
        }

        write_txn.commit()?;

        Ok(Some(updated))
    }

    /// Deletes a flight by id; returns whether a record was removed
    pub fn delete(&self, id: u64) -> Result<bool, redb::Error> {
        let write_txn = self.db.begin_write()?;
        let removed;
        {
            let mut table = write_txn.open_table(TABLE_FLIGHTS)?;
            removed = table.remove(id)?.is_some();
        }

        write_txn.commit()?;

        Ok(removed)
    }

    /// Removes every flight from the store
    pub fn delete_all(&self) -> Result<(), redb::Error> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(TABLE_FLIGHTS)?;
            table.retain(|_, _| false)?;
        }

        write_txn.commit()?;

        Ok(())
    }
}
