//! Prompt construction for the itinerary generation call.
//!
//! [`build_prompt`] serializes a [`TripRequest`] into the natural-language
//! instruction sent verbatim to the text-generation service. The clause order
//! is fixed; the same request always produces the same string.

use std::fmt::Write;

use crate::trip::TripRequest;

/// Build the generation prompt for a trip request.
///
/// Optional clauses (starting location, budget, interests, dietary
/// restrictions) are skipped when their field is absent or empty. When no
/// usable date information is present the prompt asks the model to request
/// dates instead of inventing them.
pub fn build_prompt(req: &TripRequest) -> String {
    let mut prompt = format!("Create a detailed travel itinerary for {}", req.destination);

    if let Some(from) = req.starting_location.as_deref().filter(|s| !s.is_empty()) {
        let _ = write!(prompt, " starting from {from}");
    }

    match (req.start_date, req.end_date, req.number_of_days) {
        (Some(start), Some(end), _) => {
            let _ = write!(prompt, " from {start} to {end}");
        }
        (Some(start), None, Some(days)) => {
            let _ = write!(prompt, " for {days} days starting on {start}");
        }
        _ => prompt.push_str(". Please specify dates or number of days."),
    }

    let _ = write!(prompt, " for {} person(s).", req.travelers);

    if !req.budget.is_empty() {
        let _ = write!(prompt, " with a budget of {}.", req.budget);
    }

    if !req.interests.is_empty() {
        let _ = write!(
            prompt,
            " The traveler(s) are interested in: {}.",
            req.interests.join(", ")
        );
    }

    let _ = write!(prompt, " Preferred pace: {}.", req.pace);
    let _ = write!(prompt, " Travel style: {}.", req.travel_style);
    let _ = write!(
        prompt,
        " Accommodation preference: {}.",
        req.accommodation_preference
    );
    let _ = write!(
        prompt,
        " Transportation preference: {}.",
        req.transportation_preference
    );

    if let Some(diet) = req.dietary_restrictions.as_deref().filter(|s| !s.is_empty()) {
        let _ = write!(prompt, " Dietary restrictions: {diet}.");
    }

    prompt.push_str(" Include daily activities, recommended restaurants, estimated costs, and practical tips.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CalendarDate;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// The minimal request from the planner form: required fields only.
    fn minimal_request() -> TripRequest {
        TripRequest {
            starting_location: None,
            destination: "Paris".to_string(),
            start_date: None,
            number_of_days: None,
            end_date: None,
            travelers: 1,
            budget: String::new(),
            interests: vec![],
            pace: "Relaxed".to_string(),
            travel_style: "Budget".to_string(),
            accommodation_preference: "Hotel".to_string(),
            transportation_preference: "Train".to_string(),
            dietary_restrictions: None,
        }
    }

    #[test]
    fn minimal_request_asks_for_dates() {
        let prompt = build_prompt(&minimal_request());
        assert!(prompt.starts_with("Create a detailed travel itinerary for Paris"));
        assert!(prompt.contains("Please specify dates or number of days."));
        assert!(!prompt.contains("budget"));
        assert!(!prompt.contains("interested in"));
        assert!(!prompt.contains("Dietary restrictions"));
    }

    #[test]
    fn minimal_request_keeps_fixed_preference_clauses() {
        let prompt = build_prompt(&minimal_request());
        assert!(prompt.contains(" for 1 person(s)."));
        assert!(prompt.contains(" Preferred pace: Relaxed."));
        assert!(prompt.contains(" Travel style: Budget."));
        assert!(prompt.contains(" Accommodation preference: Hotel."));
        assert!(prompt.contains(" Transportation preference: Train."));
        assert!(prompt.ends_with(
            "Include daily activities, recommended restaurants, estimated costs, and practical tips."
        ));
    }

    #[test]
    fn date_range_clause_wins_over_day_count() {
        let mut req = minimal_request();
        req.start_date = Some(date(2024, 6, 1));
        req.end_date = Some(date(2024, 6, 5));
        req.number_of_days = Some(5);
        let prompt = build_prompt(&req);
        assert!(prompt.contains(" from 2024-06-01 to 2024-06-05"));
        assert!(!prompt.contains("days starting on"));
    }

    #[test]
    fn day_count_clause_used_without_end_date() {
        let mut req = minimal_request();
        req.start_date = Some(date(2024, 6, 1));
        req.number_of_days = Some(5);
        let prompt = build_prompt(&req);
        assert!(prompt.contains(" for 5 days starting on 2024-06-01"));
    }

    #[test]
    fn end_date_alone_is_not_enough() {
        // Day count without a start date cannot anchor the trip either.
        let mut req = minimal_request();
        req.end_date = Some(date(2024, 6, 5));
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Please specify dates or number of days."));
    }

    #[test]
    fn interests_joined_in_submitted_order() {
        let mut req = minimal_request();
        req.interests = vec!["Food & Dining".to_string(), "Adventure".to_string()];
        let prompt = build_prompt(&req);
        assert!(prompt.contains("interested in: Food & Dining, Adventure."));
    }

    #[test]
    fn optional_clauses_appear_when_present() {
        let mut req = minimal_request();
        req.starting_location = Some("Berlin".to_string());
        req.budget = "$1500".to_string();
        req.dietary_restrictions = Some("vegetarian".to_string());
        let prompt = build_prompt(&req);
        assert!(prompt.contains(" starting from Berlin"));
        assert!(prompt.contains(" with a budget of $1500."));
        assert!(prompt.contains(" Dietary restrictions: vegetarian."));
    }

    #[test]
    fn empty_optional_strings_are_skipped() {
        let mut req = minimal_request();
        req.starting_location = Some(String::new());
        req.dietary_restrictions = Some(String::new());
        let prompt = build_prompt(&req);
        assert!(!prompt.contains("starting from"));
        assert!(!prompt.contains("Dietary restrictions"));
    }

    #[test]
    fn same_input_same_output() {
        let mut req = minimal_request();
        req.start_date = Some(date(2024, 6, 1));
        req.number_of_days = Some(3);
        req.interests = vec!["Relaxation".to_string()];
        assert_eq!(build_prompt(&req), build_prompt(&req));
    }

    #[test]
    fn traveler_count_is_reflected() {
        let mut req = minimal_request();
        req.travelers = 4;
        let prompt = build_prompt(&req);
        assert!(prompt.contains(" for 4 person(s)."));
    }
}
