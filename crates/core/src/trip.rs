//! Trip request model, field enumerations, and validation.
//!
//! [`TripRequest`] is the ephemeral form payload submitted by a user. It is
//! never persisted as-is; the API layer augments it with the generated
//! itinerary text and an owner before writing anything.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::CalendarDate;

// ---------------------------------------------------------------------------
// Field enumerations
// ---------------------------------------------------------------------------

/// Selectable traveler interests. `TripRequest::interests` must be a subset;
/// order is preserved as submitted.
pub const INTERESTS: &[&str] = &[
    "Culture & History",
    "Food & Dining",
    "Nature & Outdoors",
    "Shopping",
    "Nightlife",
    "Art & Museums",
    "Adventure",
    "Relaxation",
    "Family Activities",
    "Local Experiences",
];

/// Valid values for `TripRequest::pace`.
pub const PACES: &[&str] = &["Relaxed", "Moderate", "Fast-paced"];

/// Valid values for `TripRequest::travel_style`.
pub const TRAVEL_STYLES: &[&str] = &["Budget", "Mid-range", "Luxury", "Backpacker"];

/// Valid values for `TripRequest::accommodation_preference`.
pub const ACCOMMODATIONS: &[&str] = &["Hotel", "Hostel", "Apartment", "Resort", "Boutique"];

/// Valid values for `TripRequest::transportation_preference`.
pub const TRANSPORTATIONS: &[&str] = &["Walking", "Public Transit", "Rental Car", "Train", "Mixed"];

/// Upper bound on free-text fields (destination, budget, dietary notes).
pub const MAX_FIELD_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// TripRequest
// ---------------------------------------------------------------------------

/// A trip-planning request as submitted from the planner form.
///
/// At most one of `number_of_days` / `end_date` is user-authoritative at a
/// time; the other is derived by [`crate::dates`]. Both may be present here
/// because the derived value travels with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    #[serde(default)]
    pub starting_location: Option<String>,
    pub destination: String,
    #[serde(default)]
    pub start_date: Option<CalendarDate>,
    #[serde(default)]
    pub number_of_days: Option<i32>,
    #[serde(default)]
    pub end_date: Option<CalendarDate>,
    #[serde(default = "default_travelers")]
    pub travelers: i32,
    pub budget: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub pace: String,
    pub travel_style: String,
    pub accommodation_preference: String,
    pub transportation_preference: String,
    #[serde(default)]
    pub dietary_restrictions: Option<String>,
}

fn default_travelers() -> i32 {
    1
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a destination: must be non-empty and within length limit.
pub fn validate_destination(destination: &str) -> Result<(), CoreError> {
    if destination.trim().is_empty() {
        return Err(CoreError::Validation(
            "Destination must not be empty".to_string(),
        ));
    }
    if destination.len() > MAX_FIELD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Destination exceeds maximum length of {MAX_FIELD_LENGTH} characters (got {})",
            destination.len()
        )));
    }
    Ok(())
}

/// Validate a budget: free-form text, but must be non-empty.
///
/// The budget is deliberately not parsed as a number; "around $1000" and
/// "shoestring" are both acceptable inputs for the generation prompt.
pub fn validate_budget(budget: &str) -> Result<(), CoreError> {
    if budget.trim().is_empty() {
        return Err(CoreError::Validation(
            "Budget must not be empty".to_string(),
        ));
    }
    if budget.len() > MAX_FIELD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Budget exceeds maximum length of {MAX_FIELD_LENGTH} characters (got {})",
            budget.len()
        )));
    }
    Ok(())
}

/// Validate the traveler count: at least one person.
pub fn validate_travelers(travelers: i32) -> Result<(), CoreError> {
    if travelers < 1 {
        return Err(CoreError::Validation(format!(
            "Traveler count must be at least 1 (got {travelers})"
        )));
    }
    Ok(())
}

/// Validate the day count, when present: at least one day.
pub fn validate_number_of_days(number_of_days: Option<i32>) -> Result<(), CoreError> {
    if let Some(days) = number_of_days {
        if days < 1 {
            return Err(CoreError::Validation(format!(
                "Number of days must be at least 1 (got {days})"
            )));
        }
    }
    Ok(())
}

/// Validate that every selected interest is one of [`INTERESTS`].
///
/// Order and duplicates are left untouched; only membership is checked.
pub fn validate_interests(interests: &[String]) -> Result<(), CoreError> {
    for interest in interests {
        if !INTERESTS.contains(&interest.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown interest: {interest}"
            )));
        }
    }
    Ok(())
}

/// Validate a single-choice field against its enumeration.
fn validate_choice(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if !allowed.contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid {field}: {value} (expected one of: {})",
            allowed.join(", ")
        )));
    }
    Ok(())
}

impl TripRequest {
    /// Validate every field of the request.
    ///
    /// Runs before any external call is attempted; a failure here means no
    /// I/O has happened.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_destination(&self.destination)?;
        validate_budget(&self.budget)?;
        validate_travelers(self.travelers)?;
        validate_number_of_days(self.number_of_days)?;
        validate_interests(&self.interests)?;
        validate_choice("pace", &self.pace, PACES)?;
        validate_choice("travel style", &self.travel_style, TRAVEL_STYLES)?;
        validate_choice(
            "accommodation preference",
            &self.accommodation_preference,
            ACCOMMODATIONS,
        )?;
        validate_choice(
            "transportation preference",
            &self.transportation_preference,
            TRANSPORTATIONS,
        )?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A request that passes validation, for tests to mutate.
    fn valid_request() -> TripRequest {
        TripRequest {
            starting_location: None,
            destination: "Paris".to_string(),
            start_date: None,
            number_of_days: None,
            end_date: None,
            travelers: 1,
            budget: "$1000".to_string(),
            interests: vec![],
            pace: "Relaxed".to_string(),
            travel_style: "Budget".to_string(),
            accommodation_preference: "Hotel".to_string(),
            transportation_preference: "Train".to_string(),
            dietary_restrictions: None,
        }
    }

    // -- validate --

    #[test]
    fn valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn empty_destination_rejected() {
        let mut req = valid_request();
        req.destination = "  ".to_string();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("Destination must not be empty"));
    }

    #[test]
    fn empty_budget_rejected() {
        let mut req = valid_request();
        req.budget = String::new();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("Budget must not be empty"));
    }

    #[test]
    fn zero_travelers_rejected() {
        let mut req = valid_request();
        req.travelers = 0;
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn zero_days_rejected() {
        let mut req = valid_request();
        req.number_of_days = Some(0);
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("Number of days must be at least 1"));
    }

    #[test]
    fn one_day_trip_accepted() {
        let mut req = valid_request();
        req.number_of_days = Some(1);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn unknown_interest_rejected() {
        let mut req = valid_request();
        req.interests = vec!["Spelunking".to_string()];
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("Unknown interest: Spelunking"));
    }

    #[test]
    fn known_interests_keep_submitted_order() {
        let mut req = valid_request();
        req.interests = vec!["Adventure".to_string(), "Food & Dining".to_string()];
        assert!(req.validate().is_ok());
        // Validation must not reorder.
        assert_eq!(req.interests[0], "Adventure");
    }

    #[test]
    fn unknown_pace_rejected() {
        let mut req = valid_request();
        req.pace = "Leisurely".to_string();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid pace: Leisurely"));
    }

    #[test]
    fn unknown_travel_style_rejected() {
        let mut req = valid_request();
        req.travel_style = "Opulent".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn unknown_accommodation_rejected() {
        let mut req = valid_request();
        req.accommodation_preference = "Treehouse".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn unknown_transportation_rejected() {
        let mut req = valid_request();
        req.transportation_preference = "Teleport".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn too_long_destination_rejected() {
        let mut req = valid_request();
        req.destination = "x".repeat(MAX_FIELD_LENGTH + 1);
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds maximum length"));
    }

    // -- serde --

    #[test]
    fn deserializes_minimal_payload_with_defaults() {
        let json = r#"{
            "destination": "Paris",
            "budget": "$500",
            "pace": "Relaxed",
            "travel_style": "Budget",
            "accommodation_preference": "Hotel",
            "transportation_preference": "Train"
        }"#;
        let req: TripRequest = serde_json::from_str(json).expect("payload should deserialize");
        assert_eq!(req.travelers, 1);
        assert!(req.start_date.is_none());
        assert!(req.interests.is_empty());
    }

    #[test]
    fn deserializes_iso_dates() {
        let json = r#"{
            "destination": "Kyoto",
            "start_date": "2024-06-01",
            "end_date": "2024-06-05",
            "budget": "$2000",
            "pace": "Moderate",
            "travel_style": "Mid-range",
            "accommodation_preference": "Hotel",
            "transportation_preference": "Public Transit"
        }"#;
        let req: TripRequest = serde_json::from_str(json).expect("payload should deserialize");
        assert_eq!(
            req.start_date,
            Some(CalendarDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
        assert_eq!(
            req.end_date,
            Some(CalendarDate::from_ymd_opt(2024, 6, 5).unwrap())
        );
    }
}
