//! Route tree construction.

pub mod auth;
pub mod health;
pub mod trips;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register          register (public)
/// /auth/login             login (public)
/// /auth/refresh           refresh (public)
/// /auth/logout            logout (requires auth)
///
/// /trips                  submit (POST), list saved trips (GET)
/// /trips/{id}             get one saved trip
/// /trips/dates            reconcile the date triple after a form edit
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/trips", trips::router())
}
