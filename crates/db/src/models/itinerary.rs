//! Itinerary entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::trip::TripRequest;
use wayfarer_core::types::{CalendarDate, DbId, Timestamp};

/// Itinerary row from the `itineraries` table.
///
/// A trip request snapshot plus the generated plan text and its owner.
/// Rows are written once at submission time and never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Itinerary {
    pub id: DbId,
    pub user_id: DbId,
    pub starting_location: Option<String>,
    pub destination: String,
    pub start_date: Option<CalendarDate>,
    pub number_of_days: Option<i32>,
    pub end_date: Option<CalendarDate>,
    pub travelers: i32,
    pub budget: String,
    pub interests: Vec<String>,
    pub pace: String,
    pub travel_style: String,
    pub accommodation_preference: String,
    pub transportation_preference: String,
    pub dietary_restrictions: Option<String>,
    /// The generated plan text.
    pub itinerary: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new itinerary: the submitted request, its owner, and
/// the text that came back from the generation call.
#[derive(Debug, Clone)]
pub struct CreateItinerary {
    pub user_id: DbId,
    pub request: TripRequest,
    pub itinerary: String,
}
