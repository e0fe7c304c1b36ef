//! Start date / day count / end date reconciliation.
//!
//! The planner form lets a user supply either a day count or an end date.
//! At most one of the two is user-authoritative at a time: editing one clears
//! the other, which is then re-derived from the start date. The derivation is
//! an explicit pure function (not an implicit watcher) so the order of
//! operations and idempotence are testable in isolation.

use chrono::Days;

use crate::types::CalendarDate;

/// The mutually-dependent date fields of a trip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripDates {
    pub start_date: Option<CalendarDate>,
    pub number_of_days: Option<i32>,
    pub end_date: Option<CalendarDate>,
}

/// Which field the user just edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditedField {
    StartDate,
    NumberOfDays,
    EndDate,
}

/// Reconcile the triple after a single-field edit.
///
/// Edits to the start date or the day count clear the end date; edits to the
/// end date clear the day count. The cleared field is then re-derived by
/// [`derive`] once its inputs are present.
pub fn reconcile(dates: TripDates, edited: EditedField) -> TripDates {
    let mut next = dates;
    match edited {
        EditedField::StartDate | EditedField::NumberOfDays => next.end_date = None,
        EditedField::EndDate => next.number_of_days = None,
    }
    derive(next)
}

/// Fill in whichever of end date / day count is absent, when possible.
///
/// - start + days present, end absent: `end = start + (days - 1)` days,
///   counting inclusively (a 1-day trip ends on its start date).
/// - start + end present, days absent: `days = |end - start| + 1`. Calendar
///   dates differ by exact whole days, and the absolute difference is used,
///   so the result is never negative.
/// - start absent: nothing is derived regardless of the other two fields.
///
/// Idempotent: re-running on an already-consistent triple changes nothing.
/// Out-of-order dates (end before start) are not rejected here; they flow
/// through with the day count computed from the absolute difference.
pub fn derive(dates: TripDates) -> TripDates {
    let mut next = dates;

    let Some(start) = next.start_date else {
        return next;
    };

    match (next.number_of_days, next.end_date) {
        (Some(days), None) if days >= 1 => {
            next.end_date = start.checked_add_days(Days::new(days as u64 - 1));
        }
        (None, Some(end)) => {
            let span = end.signed_duration_since(start).num_days().abs();
            next.number_of_days = Some(span as i32 + 1);
        }
        _ => {}
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- derive: end date from day count --

    #[test]
    fn five_days_from_june_first_ends_june_fifth() {
        let out = derive(TripDates {
            start_date: Some(date(2024, 6, 1)),
            number_of_days: Some(5),
            end_date: None,
        });
        assert_eq!(out.end_date, Some(date(2024, 6, 5)));
        assert_eq!(out.number_of_days, Some(5));
    }

    #[test]
    fn one_day_trip_ends_on_start_date() {
        let out = derive(TripDates {
            start_date: Some(date(2024, 6, 1)),
            number_of_days: Some(1),
            end_date: None,
        });
        assert_eq!(out.end_date, Some(date(2024, 6, 1)));
    }

    #[test]
    fn end_date_crosses_month_boundary() {
        let out = derive(TripDates {
            start_date: Some(date(2024, 1, 30)),
            number_of_days: Some(4),
            end_date: None,
        });
        assert_eq!(out.end_date, Some(date(2024, 2, 2)));
    }

    #[test]
    fn nonpositive_day_count_derives_nothing() {
        let out = derive(TripDates {
            start_date: Some(date(2024, 6, 1)),
            number_of_days: Some(0),
            end_date: None,
        });
        assert_eq!(out.end_date, None);
    }

    // -- derive: day count from end date --

    #[test]
    fn june_first_to_fifth_is_five_days() {
        let out = derive(TripDates {
            start_date: Some(date(2024, 6, 1)),
            number_of_days: None,
            end_date: Some(date(2024, 6, 5)),
        });
        assert_eq!(out.number_of_days, Some(5));
        assert_eq!(out.end_date, Some(date(2024, 6, 5)));
    }

    #[test]
    fn same_day_is_one_day() {
        let out = derive(TripDates {
            start_date: Some(date(2024, 6, 1)),
            number_of_days: None,
            end_date: Some(date(2024, 6, 1)),
        });
        assert_eq!(out.number_of_days, Some(1));
    }

    #[test]
    fn out_of_order_dates_use_absolute_difference() {
        // End before start is not rejected; the span is absolute.
        let out = derive(TripDates {
            start_date: Some(date(2024, 6, 5)),
            number_of_days: None,
            end_date: Some(date(2024, 6, 1)),
        });
        assert_eq!(out.number_of_days, Some(5));
    }

    // -- derive: missing inputs --

    #[test]
    fn no_start_date_derives_nothing() {
        let out = derive(TripDates {
            start_date: None,
            number_of_days: Some(5),
            end_date: Some(date(2024, 6, 9)),
        });
        assert_eq!(out.number_of_days, Some(5));
        assert_eq!(out.end_date, Some(date(2024, 6, 9)));
    }

    #[test]
    fn derive_is_idempotent() {
        let once = derive(TripDates {
            start_date: Some(date(2024, 6, 1)),
            number_of_days: Some(5),
            end_date: None,
        });
        let twice = derive(once);
        assert_eq!(once, twice);
    }

    // -- reconcile: authoritative-field clearing --

    #[test]
    fn editing_day_count_clears_and_rederives_end_date() {
        // End date was previously derived from a 5-day count.
        let current = TripDates {
            start_date: Some(date(2024, 6, 1)),
            number_of_days: Some(3),
            end_date: Some(date(2024, 6, 5)),
        };
        let out = reconcile(current, EditedField::NumberOfDays);
        assert_eq!(out.end_date, Some(date(2024, 6, 3)));
    }

    #[test]
    fn editing_end_date_clears_and_rederives_day_count() {
        let current = TripDates {
            start_date: Some(date(2024, 6, 1)),
            number_of_days: Some(5),
            end_date: Some(date(2024, 6, 10)),
        };
        let out = reconcile(current, EditedField::EndDate);
        assert_eq!(out.number_of_days, Some(10));
    }

    #[test]
    fn editing_start_date_rederives_end_from_day_count() {
        let current = TripDates {
            start_date: Some(date(2024, 7, 1)),
            number_of_days: Some(5),
            end_date: Some(date(2024, 6, 5)),
        };
        let out = reconcile(current, EditedField::StartDate);
        assert_eq!(out.end_date, Some(date(2024, 7, 5)));
    }

    #[test]
    fn editing_start_date_without_day_count_drops_end_date() {
        let current = TripDates {
            start_date: Some(date(2024, 7, 1)),
            number_of_days: None,
            end_date: Some(date(2024, 6, 5)),
        };
        let out = reconcile(current, EditedField::StartDate);
        assert_eq!(out.end_date, None);
        assert_eq!(out.number_of_days, None);
    }

    #[test]
    fn reconcile_with_no_start_date_only_clears() {
        let current = TripDates {
            start_date: None,
            number_of_days: Some(4),
            end_date: Some(date(2024, 6, 5)),
        };
        let out = reconcile(current, EditedField::NumberOfDays);
        assert_eq!(out.number_of_days, Some(4));
        assert_eq!(out.end_date, None);
    }
}
