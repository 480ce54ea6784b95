//! Database initialization and table definitions
//!
//! This module handles the setup and configuration of the embedded redb
//! database and defines the application state shared across handlers.

use redb::{Database, TableDefinition};

use crate::store::FlightStore;

/// Main table for storing flight records
///
/// Key: store-assigned numeric flight id
/// Value: JSON-serialized Flight as string
///
/// Example:
/// - Key: 1
/// - Value: '{"id":1,"flight_number":"UA123","origin":"JFK",...}'
pub const TABLE_FLIGHTS: TableDefinition<u64, &str> = TableDefinition::new("flights_v1");

/// Application state shared across all request handlers
///
/// Wraps the flight store (which holds the database behind an Arc) so it can
/// be cloned cheaply into every async handler in the Axum web framework.
#[derive(Clone)]
pub struct AppState {
    pub store: FlightStore,
}

/// Initializes the embedded database and creates the flights table
///
/// # Arguments
///
/// * `db_path` - File path where the database should be stored (e.g., "flights.db")
///
/// # Returns
///
/// * `Ok(Database)` - Successfully initialized database instance
/// * `Err(redb::Error)` - Database initialization error
pub fn init_db(db_path: &str) -> Result<Database, redb::Error> {
    // Create or open the database file
    let db = Database::create(db_path)?;

    // Begin a write transaction to create the table
    let write_txn = db.begin_write()?;
    {
        write_txn.open_table(TABLE_FLIGHTS)?;
    }

    // Commit the transaction to persist the table structure
    write_txn.commit()?;

    Ok(db)
}
