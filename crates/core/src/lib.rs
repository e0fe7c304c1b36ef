//! Pure domain logic for the Wayfarer trip planner.
//!
//! This crate holds everything that can be expressed without I/O: the trip
//! request model and its field enumerations, date reconciliation, prompt
//! construction, and the shared error type. It has zero internal deps so it
//! can be used by the API layer, the persistence layer, and any future CLI
//! tooling.

pub mod dates;
pub mod error;
pub mod prompt;
pub mod trip;
pub mod types;
