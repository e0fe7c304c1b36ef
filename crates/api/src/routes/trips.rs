//! Route definitions for trip planning.
//!
//! Mounted at `/trips` by `api_routes()`. All routes require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::trips;
use crate::state::AppState;

/// Trip routes.
///
/// ```text
/// POST   /          -> submit_trip
/// GET    /          -> list_trips
/// GET    /{id}      -> get_trip
/// POST   /dates     -> reconcile_dates
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(trips::submit_trip).get(trips::list_trips))
        .route("/dates", post(trips::reconcile_dates))
        .route("/{id}", get(trips::get_trip))
}
