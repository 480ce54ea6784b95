//! Library exports for the flight lookup service
//!
//! This module exposes internal components for testing and potential library usage.

pub mod agent;
pub mod database;
pub mod handler;
pub mod model;
pub mod query;
pub mod report;
pub mod route;
pub mod seed;
pub mod store;
