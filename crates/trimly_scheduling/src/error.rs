// --- File: crates/trimly_scheduling/src/error.rs ---
use thiserror::Error;

/// Validation failures surfaced by the scheduling core.
///
/// Everything here is a synchronous, recoverable input error that
/// propagates straight back to whoever supplied the bad value. An
/// unbookable slot is *not* an error — the guard reports that as a
/// normal [`crate::guard::BookingDecision::Reject`] value so callers
/// handle it as a first-class outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
    #[error("Invalid business configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid service duration: {0} minutes")]
    InvalidDuration(i64),
}
