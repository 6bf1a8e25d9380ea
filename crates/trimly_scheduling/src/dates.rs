// --- File: crates/trimly_scheduling/src/dates.rs ---
//! Booking-horizon date filtering.

use crate::rules::AvailabilityRules;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One calendar date within the booking horizon, tagged with whether the
/// business is open on that weekday. Produced fresh; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDate {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub selectable: bool,
}

/// Candidate dates for the horizon `[today, today + horizon_days]`, both
/// ends inclusive.
///
/// `today` is supplied by the caller rather than read from a clock, so
/// the function stays a pure, testable mapping of its inputs. Dates
/// before `today` or past the horizon are never produced — the upper
/// bound is a hard cutoff, not a suggestion.
pub fn selectable_dates(
    today: NaiveDate,
    horizon_days: u32,
    rules: &AvailabilityRules,
) -> Vec<CandidateDate> {
    (0..=u64::from(horizon_days))
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| CandidateDate {
            date,
            weekday: date.weekday(),
            selectable: rules.is_weekday_open(date.weekday()),
        })
        .collect()
}
