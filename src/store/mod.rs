//! Persistence: the CSV data file and the operation log.

pub mod csv_store;
pub mod oplog;

pub use csv_store::{load, save};
