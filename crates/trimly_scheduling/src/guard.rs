// --- File: crates/trimly_scheduling/src/guard.rs ---
//! Write-time conflict guard: the last check before a booking persists.

use crate::occupancy::OccupancyIndex;
use crate::rules::AvailabilityRules;
use crate::time::{ServiceDuration, TimeOfDay};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A booking attempt about to be persisted.
///
/// The duration field is a [`ServiceDuration`], so a request with a
/// zero or negative duration cannot be constructed in the first place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BookingRequest {
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub duration: ServiceDuration,
}

/// Why the guard turned a booking request away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    ClosedDay,
    LunchBreak,
    Conflict,
    InsufficientRoomBeforeClose,
}

/// Outcome of write-time validation.
///
/// Rejection is a normal, expected result — a value, never an error —
/// so callers are forced to handle "slot no longer available" as a
/// first-class case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum BookingDecision {
    Accept,
    Reject { reason: RejectReason },
}

/// Validates one request against the freshest occupancy snapshot the
/// caller can supply.
///
/// This intentionally repeats the slot generator's three checks. The
/// slot list the client saw may be minutes old; re-running the same
/// conditions against occupancy fetched at commit time narrows the
/// check-to-use window as far as a single process can. The storage
/// layer's unique constraint remains the final backstop under truly
/// concurrent writers.
pub fn validate(
    request: &BookingRequest,
    occupancy: &OccupancyIndex,
    rules: &AvailabilityRules,
) -> BookingDecision {
    if !rules.is_weekday_open(request.date.weekday()) {
        return reject(request, RejectReason::ClosedDay);
    }

    let end = request.start_time.add_minutes(request.duration);
    if rules.lunch_overlaps(request.start_time, end) {
        return reject(request, RejectReason::LunchBreak);
    }
    if occupancy.overlaps(request.start_time, end) {
        return reject(request, RejectReason::Conflict);
    }
    if end > rules.close_time() {
        return reject(request, RejectReason::InsufficientRoomBeforeClose);
    }

    BookingDecision::Accept
}

fn reject(request: &BookingRequest, reason: RejectReason) -> BookingDecision {
    debug!(
        "Rejected booking on {} at {}: {:?}",
        request.date, request.start_time, reason
    );
    BookingDecision::Reject { reason }
}
