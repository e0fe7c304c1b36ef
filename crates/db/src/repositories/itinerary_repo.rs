//! Repository for the `itineraries` table.

use sqlx::PgPool;
use wayfarer_core::types::DbId;

use crate::models::itinerary::{CreateItinerary, Itinerary};

const COLUMNS: &str = "id, user_id, starting_location, destination, start_date, number_of_days, \
                       end_date, travelers, budget, interests, pace, travel_style, \
                       accommodation_preference, transportation_preference, \
                       dietary_restrictions, itinerary, created_at";

/// Provides create/read operations for itineraries.
///
/// There is deliberately no update or delete: an itinerary is immutable
/// once written.
pub struct ItineraryRepo;

impl ItineraryRepo {
    /// Insert a new itinerary, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateItinerary) -> Result<Itinerary, sqlx::Error> {
        let req = &input.request;
        let query = format!(
            "INSERT INTO itineraries (
                user_id, starting_location, destination, start_date, number_of_days,
                end_date, travelers, budget, interests, pace, travel_style,
                accommodation_preference, transportation_preference,
                dietary_restrictions, itinerary)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(input.user_id)
            .bind(&req.starting_location)
            .bind(&req.destination)
            .bind(req.start_date)
            .bind(req.number_of_days)
            .bind(req.end_date)
            .bind(req.travelers)
            .bind(&req.budget)
            .bind(&req.interests)
            .bind(&req.pace)
            .bind(&req.travel_style)
            .bind(&req.accommodation_preference)
            .bind(&req.transportation_preference)
            .bind(&req.dietary_restrictions)
            .bind(&input.itinerary)
            .fetch_one(pool)
            .await
    }

    /// Find an itinerary by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Itinerary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM itineraries WHERE id = $1");
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's itineraries, most recently created first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Itinerary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM itineraries
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
