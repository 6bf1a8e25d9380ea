// --- File: crates/trimly_scheduling/src/slots.rs ---
//! The central algorithm: tagged slot generation for one business day.

use crate::occupancy::OccupancyIndex;
use crate::rules::AvailabilityRules;
use crate::time::{ServiceDuration, TimeOfDay};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Why a generated slot cannot be booked.
///
/// When several conditions apply at once, the reported reason follows a
/// fixed priority: lunch break first (a fixed, non-negotiable boundary),
/// then a booking conflict, then insufficient room before closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailabilityReason {
    LunchBreak,
    Conflict,
    InsufficientRoomBeforeClose,
}

/// One candidate appointment start time, tagged with availability.
///
/// Produced fresh on every generation; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub time: TimeOfDay,
    pub available: bool,
    pub reason: Option<UnavailabilityReason>,
}

/// Generates the ordered slot sequence for one professional's day.
///
/// Composes the availability rules, the occupancy snapshot and the
/// requested service duration. For every candidate start time the slot
/// is available exactly when the service fits before closing, does not
/// touch the lunch break, and does not overlap an existing booking —
/// all three with half-open interval semantics.
///
/// A closed weekday yields an *empty* vector. That is a stronger signal
/// than "every slot unavailable" and callers must keep the distinction
/// when rendering "closed" versus "fully booked".
///
/// Pure and idempotent: identical inputs produce identical output, and
/// neither `rules` nor `occupancy` is ever mutated.
pub fn generate_day_slots(
    date: NaiveDate,
    service_duration: ServiceDuration,
    rules: &AvailabilityRules,
    occupancy: &OccupancyIndex,
) -> Vec<Slot> {
    let weekday = date.weekday();
    if !rules.is_weekday_open(weekday) {
        debug!("No slots for {}: {} is a closed weekday", date, weekday);
        return Vec::new();
    }

    let mut slots = Vec::new();
    for candidate_start in rules.candidate_start_times() {
        let candidate_end = candidate_start.add_minutes(service_duration);

        // An end past midnight orders after close_time, so a service
        // running past the day boundary fails this check naturally.
        let fits_before_close = candidate_end <= rules.close_time();
        let in_lunch = rules.lunch_overlaps(candidate_start, candidate_end);
        let conflict = occupancy.overlaps(candidate_start, candidate_end);

        let available = fits_before_close && !in_lunch && !conflict;
        let reason = if available {
            None
        } else if in_lunch {
            Some(UnavailabilityReason::LunchBreak)
        } else if conflict {
            Some(UnavailabilityReason::Conflict)
        } else {
            Some(UnavailabilityReason::InsufficientRoomBeforeClose)
        };

        slots.push(Slot {
            time: candidate_start,
            available,
            reason,
        });
    }

    debug!(
        "Generated {} slots for {} ({} available)",
        slots.len(),
        date,
        slots.iter().filter(|s| s.available).count()
    );
    slots
}
