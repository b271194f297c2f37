//! SQLite storage implementation for the Stockle fetcher.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `stockle-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for equities and daily puzzles
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!      core (domain)
//!            │
//!            ▼
//!  storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod equities;
pub mod puzzles;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use equities::EquityRepository;
pub use puzzles::PuzzleRepository;

// Re-export from stockle-core for convenience
pub use stockle_core::errors::{DatabaseError, Error, Result};
