// --- File: crates/trimly_scheduling/src/occupancy.rs ---
//! The set of already-booked intervals for one (professional, date) pair.

use crate::error::SchedulingError;
use crate::time::{ServiceDuration, TimeOfDay};
use serde::{Deserialize, Serialize};
use trimly_common::services::BookedInterval;

/// Half-open interval overlap test: `[a_start, a_end)` against
/// `[b_start, b_end)`.
///
/// This is the single overlap implementation in the crate — the slot
/// generator, the lunch check and the conflict guard all route through
/// it, so a booking ending exactly when another starts never counts as
/// a conflict anywhere.
pub fn intervals_overlap(
    a_start: TimeOfDay,
    a_end: TimeOfDay,
    b_start: TimeOfDay,
    b_end: TimeOfDay,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// One existing booking on a professional's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedInterval {
    pub start_time: TimeOfDay,
    pub duration: ServiceDuration,
}

impl OccupiedInterval {
    pub fn end_time(&self) -> TimeOfDay {
        self.start_time.add_minutes(self.duration)
    }
}

/// Queryable occupancy snapshot for one (professional, date) pair.
///
/// Built fresh from the booking store for every query and never mutated
/// in place; [`OccupancyIndex::with_added`] returns a new index.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    intervals: Vec<OccupiedInterval>,
}

impl OccupancyIndex {
    pub fn empty() -> Self {
        OccupancyIndex::default()
    }

    pub fn new(mut intervals: Vec<OccupiedInterval>) -> Self {
        intervals.sort_by_key(|interval| interval.start_time);
        OccupancyIndex { intervals }
    }

    /// Builds an index from the ("HH:MM", minutes) pairs the booking
    /// store reports. Malformed rows fail fast rather than silently
    /// shrinking the occupancy.
    pub fn from_bookings(bookings: &[BookedInterval]) -> Result<Self, SchedulingError> {
        let mut intervals = Vec::with_capacity(bookings.len());
        for booking in bookings {
            intervals.push(OccupiedInterval {
                start_time: TimeOfDay::parse(&booking.start_time)?,
                duration: ServiceDuration::from_minutes(booking.duration_minutes)?,
            });
        }
        Ok(OccupancyIndex::new(intervals))
    }

    /// True if `[candidate_start, candidate_end)` intersects any stored
    /// interval.
    pub fn overlaps(&self, candidate_start: TimeOfDay, candidate_end: TimeOfDay) -> bool {
        self.intervals.iter().any(|interval| {
            intervals_overlap(
                candidate_start,
                candidate_end,
                interval.start_time,
                interval.end_time(),
            )
        })
    }

    /// A new index with one more interval; the original is untouched.
    pub fn with_added(&self, interval: OccupiedInterval) -> Self {
        let mut intervals = self.intervals.clone();
        intervals.push(interval);
        OccupancyIndex::new(intervals)
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn intervals(&self) -> &[OccupiedInterval] {
        &self.intervals
    }
}
