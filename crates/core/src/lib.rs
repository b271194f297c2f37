//! Stockle Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the daily fetcher: refreshing
//! the equity catalog and creating the daily puzzle. It is database-agnostic
//! and defines traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod equities;
pub mod errors;
pub mod market_data;
pub mod puzzles;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
