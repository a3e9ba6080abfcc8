//! SQLite storage implementation for FitTrack.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `fittrack-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The serialized writer that runs every write as one transaction
//! - Repository implementations and aggregate queries
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `core` is database-agnostic and works with traits.
//!
//! ```text
//!   core (domain)        server (axum)
//!        │                    │
//!        └─────────┬──────────┘
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod seed;

// Repository implementations
pub mod friends;
pub mod goals;
pub mod stats;
pub mod users;
pub mod workouts;

#[cfg(test)]
mod test_utils;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, write_actor::spawn_writer,
    DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use friends::FriendRepository;
pub use goals::GoalRepository;
pub use seed::seed_demo_data;
pub use stats::StatsRepository;
pub use users::UserRepository;
pub use workouts::WorkoutRepository;

// Re-export from fittrack-core for convenience
pub use fittrack_core::errors::{DatabaseError, Error, Result};
