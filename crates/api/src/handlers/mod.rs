//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `wayfarer_db` (or to the
//! [`crate::planner`] service for submissions) and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod trips;
