//! The trip submission sequence: validate, generate, persist.
//!
//! [`Planner`] owns the two external collaborators (the text generator and
//! the itinerary store) as injected trait objects, so the whole sequence is
//! testable without a database or network access. A per-user in-flight guard
//! makes duplicate submissions no-ops instead of duplicate external calls.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wayfarer_core::types::DbId;
use wayfarer_core::{dates, prompt, trip::TripRequest};
use wayfarer_db::models::itinerary::{CreateItinerary, Itinerary};
use wayfarer_db::repositories::ItineraryRepo;
use wayfarer_db::DbPool;
use wayfarer_gemini::{GeminiError, ItineraryGenerator};

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Persistence seam
// ---------------------------------------------------------------------------

/// Write side of itinerary persistence, as seen by the submission sequence.
///
/// The production implementation is the Postgres pool; tests substitute an
/// in-memory store.
#[async_trait]
pub trait ItineraryStore: Send + Sync {
    /// Persist a generated itinerary, returning the stored row.
    async fn save(&self, input: &CreateItinerary) -> Result<Itinerary, sqlx::Error>;
}

#[async_trait]
impl ItineraryStore for DbPool {
    async fn save(&self, input: &CreateItinerary) -> Result<Itinerary, sqlx::Error> {
        ItineraryRepo::create(self, input).await
    }
}

// ---------------------------------------------------------------------------
// In-flight guard
// ---------------------------------------------------------------------------

/// Tracks which users currently have a submission outstanding.
///
/// One slot per user: a second submission while the first is still running
/// is rejected before any external call is made. The slot is freed on every
/// exit path, success or failure.
#[derive(Debug, Default)]
struct InFlight(Mutex<HashSet<DbId>>);

impl InFlight {
    /// Claim the slot for `user_id`. Returns `false` if already claimed.
    fn try_acquire(&self, user_id: DbId) -> bool {
        self.0
            .lock()
            .expect("in-flight set lock poisoned")
            .insert(user_id)
    }

    /// Free the slot for `user_id`.
    fn release(&self, user_id: DbId) {
        self.0
            .lock()
            .expect("in-flight set lock poisoned")
            .remove(&user_id);
    }
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Runs the submission sequence for trip requests.
pub struct Planner {
    generator: Arc<dyn ItineraryGenerator>,
    store: Arc<dyn ItineraryStore>,
    in_flight: InFlight,
}

impl Planner {
    /// Create a planner over the given generator and store.
    pub fn new(generator: Arc<dyn ItineraryGenerator>, store: Arc<dyn ItineraryStore>) -> Self {
        Self {
            generator,
            store,
            in_flight: InFlight::default(),
        }
    }

    /// Run the full submission sequence for one trip request.
    ///
    /// Order matters:
    /// 1. derive whichever of end date / day count the client left blank;
    /// 2. validate -- a failure here means no I/O happened;
    /// 3. confirm the generator is configured, so a missing API key surfaces
    ///    as a configuration error instead of a failed call;
    /// 4. claim the caller's in-flight slot;
    /// 5. generate, then persist. A failure at either step aborts the
    ///    sequence and leaves no partial record.
    ///
    /// Nothing is retried.
    pub async fn plan_trip(&self, user_id: DbId, request: TripRequest) -> AppResult<Itinerary> {
        let request = fill_derived_dates(request);
        request.validate()?;

        if !self.generator.is_configured() {
            return Err(AppError::Generation(GeminiError::MissingApiKey));
        }

        if !self.in_flight.try_acquire(user_id) {
            tracing::warn!(user_id, "Duplicate trip submission rejected");
            return Err(AppError::AlreadyInFlight);
        }

        let result = self.generate_and_store(user_id, request).await;
        self.in_flight.release(user_id);
        result
    }

    async fn generate_and_store(
        &self,
        user_id: DbId,
        request: TripRequest,
    ) -> AppResult<Itinerary> {
        let prompt = prompt::build_prompt(&request);
        let text = self.generator.generate(&prompt).await?;

        let input = CreateItinerary {
            user_id,
            request,
            itinerary: text,
        };
        let stored = self.store.save(&input).await?;

        tracing::info!(
            itinerary_id = stored.id,
            user_id,
            destination = %stored.destination,
            "Itinerary generated and stored"
        );
        Ok(stored)
    }
}

/// Fill in whichever of end date / day count is derivable from the others.
///
/// API clients send whichever field the user last edited; the counterpart is
/// recomputed here with the same pure derivation the form uses.
fn fill_derived_dates(mut request: TripRequest) -> TripRequest {
    let derived = dates::derive(dates::TripDates {
        start_date: request.start_date,
        number_of_days: request.number_of_days,
        end_date: request.end_date,
    });
    request.number_of_days = derived.number_of_days;
    request.end_date = derived.end_date;
    request
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
