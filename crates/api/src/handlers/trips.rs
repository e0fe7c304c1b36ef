//! Handlers for the `/trips` resource.
//!
//! Submission runs the full generate-and-persist sequence via
//! [`crate::planner::Planner`]; reads go straight to the repository. Every
//! endpoint requires authentication and is scoped to the caller's own trips.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use wayfarer_core::dates::{self, EditedField, TripDates};
use wayfarer_core::error::CoreError;
use wayfarer_core::trip::TripRequest;
use wayfarer_core::types::{CalendarDate, DbId};
use wayfarer_db::repositories::ItineraryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /trips
// ---------------------------------------------------------------------------

/// Submit a trip request: validate, generate an itinerary, persist it.
pub async fn submit_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> AppResult<impl IntoResponse> {
    let itinerary = state.planner.plan_trip(auth.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: itinerary })))
}

// ---------------------------------------------------------------------------
// GET /trips
// ---------------------------------------------------------------------------

/// List the caller's saved trips, most recently created first.
pub async fn list_trips(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let itineraries = ItineraryRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: itineraries }))
}

// ---------------------------------------------------------------------------
// GET /trips/:id
// ---------------------------------------------------------------------------

/// Get a single saved trip by ID. Owner-checked.
pub async fn get_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let itinerary = ItineraryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Itinerary",
            id,
        }))?;

    if itinerary.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only view your own trips".into(),
        )));
    }

    Ok(Json(DataResponse { data: itinerary }))
}

// ---------------------------------------------------------------------------
// POST /trips/dates
// ---------------------------------------------------------------------------

/// Request body for `POST /trips/dates`.
#[derive(Debug, Deserialize)]
pub struct ReconcileDatesRequest {
    #[serde(default)]
    pub start_date: Option<CalendarDate>,
    #[serde(default)]
    pub number_of_days: Option<i32>,
    #[serde(default)]
    pub end_date: Option<CalendarDate>,
    /// Which field the user just edited.
    pub edited: EditedDateField,
}

/// Wire form of [`EditedField`].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditedDateField {
    StartDate,
    NumberOfDays,
    EndDate,
}

impl From<EditedDateField> for EditedField {
    fn from(field: EditedDateField) -> Self {
        match field {
            EditedDateField::StartDate => EditedField::StartDate,
            EditedDateField::NumberOfDays => EditedField::NumberOfDays,
            EditedDateField::EndDate => EditedField::EndDate,
        }
    }
}

/// Reconciled triple returned to the form.
#[derive(Debug, Serialize)]
pub struct ReconcileDatesResponse {
    pub start_date: Option<CalendarDate>,
    pub number_of_days: Option<i32>,
    pub end_date: Option<CalendarDate>,
}

/// Reconcile the start date / day count / end date triple after an edit.
///
/// Called by the planner form on each change to one of the three fields, so
/// the derivation logic lives here once instead of being duplicated
/// client-side.
pub async fn reconcile_dates(
    _auth: AuthUser,
    Json(input): Json<ReconcileDatesRequest>,
) -> AppResult<Json<DataResponse<ReconcileDatesResponse>>> {
    let reconciled = dates::reconcile(
        TripDates {
            start_date: input.start_date,
            number_of_days: input.number_of_days,
            end_date: input.end_date,
        },
        input.edited.into(),
    );

    Ok(Json(DataResponse {
        data: ReconcileDatesResponse {
            start_date: reconciled.start_date,
            number_of_days: reconciled.number_of_days,
            end_date: reconciled.end_date,
        },
    }))
}
