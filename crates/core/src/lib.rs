//! FitTrack Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the fitness tracker.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod friends;
pub mod goals;
pub mod stats;
pub mod users;
pub mod utils;
pub mod workouts;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
