//! Outbound adapters implementing domain ports.
//!
//! - [`persistence`]: PostgreSQL via Diesel.
//! - [`memory`]: in-process store for database-less runs and tests.

pub mod memory;
pub mod persistence;
