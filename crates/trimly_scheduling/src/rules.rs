// --- File: crates/trimly_scheduling/src/rules.rs ---
//! Validated per-tenant operating configuration.

use crate::error::SchedulingError;
use crate::occupancy::intervals_overlap;
use crate::time::{ServiceDuration, TimeOfDay};
use chrono::Weekday;
use std::collections::HashSet;
use trimly_config::ScheduleConfig;

/// The lunch break window, half-open: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunchBreak {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// A tenant's validated business hours, read-only for the duration of a
/// scheduling query.
///
/// Construction is the only place configuration is checked: `open <
/// close`, the lunch break (if any) inside opening hours, and a positive
/// slot granularity. Once an instance exists, every query method can
/// assume those invariants.
#[derive(Debug, Clone)]
pub struct AvailabilityRules {
    open_time: TimeOfDay,
    close_time: TimeOfDay,
    lunch: Option<LunchBreak>,
    open_weekdays: HashSet<Weekday>,
    slot_granularity: ServiceDuration,
}

impl AvailabilityRules {
    pub fn new(
        open_time: TimeOfDay,
        close_time: TimeOfDay,
        lunch: Option<LunchBreak>,
        open_weekdays: HashSet<Weekday>,
        slot_granularity: ServiceDuration,
    ) -> Result<Self, SchedulingError> {
        if open_time >= close_time {
            return Err(SchedulingError::InvalidConfiguration(format!(
                "open time {} must be before close time {}",
                open_time, close_time
            )));
        }
        if let Some(lunch) = lunch {
            if lunch.start >= lunch.end {
                return Err(SchedulingError::InvalidConfiguration(format!(
                    "lunch start {} must be before lunch end {}",
                    lunch.start, lunch.end
                )));
            }
            if lunch.start < open_time || lunch.end > close_time {
                return Err(SchedulingError::InvalidConfiguration(format!(
                    "lunch break {}-{} must lie within opening hours {}-{}",
                    lunch.start, lunch.end, open_time, close_time
                )));
            }
        }
        Ok(AvailabilityRules {
            open_time,
            close_time,
            lunch,
            open_weekdays,
            slot_granularity,
        })
    }

    /// Builds rules from the raw tenant configuration blob.
    ///
    /// All malformed input — unparseable times, unknown weekday names, a
    /// non-positive granularity, a half-configured lunch break — comes back
    /// as [`SchedulingError::InvalidConfiguration`], so the loosely-typed
    /// blob never reaches the algorithms.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, SchedulingError> {
        let parse_time = |label: &str, text: &str| {
            TimeOfDay::parse(text).map_err(|_| {
                SchedulingError::InvalidConfiguration(format!("{}: bad time {:?}", label, text))
            })
        };

        let open_time = parse_time("open_time", &config.open_time)?;
        let close_time = parse_time("close_time", &config.close_time)?;

        let lunch = match (&config.lunch_start, &config.lunch_end) {
            (Some(start), Some(end)) => Some(LunchBreak {
                start: parse_time("lunch_start", start)?,
                end: parse_time("lunch_end", end)?,
            }),
            (None, None) => None,
            _ => {
                return Err(SchedulingError::InvalidConfiguration(
                    "lunch_start and lunch_end must be set together".to_string(),
                ))
            }
        };

        let mut open_weekdays = HashSet::new();
        for name in &config.open_weekdays {
            let weekday: Weekday = name.parse().map_err(|_| {
                SchedulingError::InvalidConfiguration(format!("unknown weekday: {:?}", name))
            })?;
            open_weekdays.insert(weekday);
        }

        let slot_granularity = ServiceDuration::from_minutes(config.slot_granularity_minutes)
            .map_err(|_| {
                SchedulingError::InvalidConfiguration(format!(
                    "slot granularity must be positive, got {}",
                    config.slot_granularity_minutes
                ))
            })?;

        AvailabilityRules::new(open_time, close_time, lunch, open_weekdays, slot_granularity)
    }

    pub fn open_time(&self) -> TimeOfDay {
        self.open_time
    }

    pub fn close_time(&self) -> TimeOfDay {
        self.close_time
    }

    pub fn lunch(&self) -> Option<LunchBreak> {
        self.lunch
    }

    pub fn slot_granularity(&self) -> ServiceDuration {
        self.slot_granularity
    }

    pub fn is_weekday_open(&self, weekday: Weekday) -> bool {
        self.open_weekdays.contains(&weekday)
    }

    /// True if a lunch break is configured and `lunch.start <= t < lunch.end`.
    pub fn is_within_lunch(&self, t: TimeOfDay) -> bool {
        self.lunch
            .map(|lunch| lunch.start <= t && t < lunch.end)
            .unwrap_or(false)
    }

    /// True if `[start, end)` intersects the lunch break.
    ///
    /// This is the interval test, not a point test: a service that starts
    /// before lunch but would run into it is blocked too.
    pub fn lunch_overlaps(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        self.lunch
            .map(|lunch| intervals_overlap(start, end, lunch.start, lunch.end))
            .unwrap_or(false)
    }

    /// Candidate slot start times for one day, ascending:
    /// `open, open+granularity, open+2*granularity, ...` while strictly
    /// before `close`. Re-iterable; each call restarts from `open`.
    pub fn candidate_start_times(&self) -> impl Iterator<Item = TimeOfDay> + '_ {
        let step = self.slot_granularity;
        std::iter::successors(Some(self.open_time), move |t| Some(t.add_minutes(step)))
            .take_while(move |t| *t < self.close_time)
    }
}
