// --- File: crates/trimly_scheduling/src/time.rs ---
//! Pure time arithmetic over "HH:MM" clock times and minute durations.

use crate::error::SchedulingError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A clock time within one business day, stored as minutes since midnight.
///
/// Values at or past 24:00 cannot be parsed, but [`TimeOfDay::add_minutes`]
/// can produce them: the addition never wraps around midnight. Such values
/// order *after* every parseable time, which is exactly what the
/// closing-time checks rely on — a slot whose end runs past midnight can
/// never satisfy `end <= close_time`, so it falls out as
/// "insufficient room before close" rather than silently landing on the
/// next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u32,
}

impl TimeOfDay {
    /// Parses a "HH:MM" 24-hour time string.
    ///
    /// Fails with [`SchedulingError::InvalidFormat`] on anything that is
    /// not exactly two digits, a colon, and two digits within 00:00-23:59.
    pub fn parse(text: &str) -> Result<Self, SchedulingError> {
        let invalid = || SchedulingError::InvalidFormat(text.to_string());

        let (hours_str, minutes_str) = text.split_once(':').ok_or_else(invalid)?;
        if hours_str.len() != 2
            || minutes_str.len() != 2
            || !hours_str.bytes().all(|b| b.is_ascii_digit())
            || !minutes_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hours: u32 = hours_str.parse().map_err(|_| invalid())?;
        let minutes: u32 = minutes_str.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        Ok(TimeOfDay {
            minutes: hours * 60 + minutes,
        })
    }

    /// Builds a time from hour and minute components. Test and fixture
    /// convenience; same validity rules as [`TimeOfDay::parse`].
    pub fn from_hm(hours: u32, minutes: u32) -> Result<Self, SchedulingError> {
        if hours > 23 || minutes > 59 {
            return Err(SchedulingError::InvalidFormat(format!(
                "{:02}:{:02}",
                hours, minutes
            )));
        }
        Ok(TimeOfDay {
            minutes: hours * 60 + minutes,
        })
    }

    /// Minutes since midnight. May be >= 1440 for overflowed values.
    pub fn minutes_from_midnight(self) -> u32 {
        self.minutes
    }

    /// Adds a duration without wrapping around midnight.
    ///
    /// The result may lie past 23:59; see the type-level docs for how
    /// overflowed values behave under comparison. The addition saturates,
    /// so even an absurdly long duration stays "later than any valid
    /// time" instead of wrapping back into the day.
    pub fn add_minutes(self, duration: ServiceDuration) -> TimeOfDay {
        TimeOfDay {
            minutes: self.minutes.saturating_add(duration.minutes()),
        }
    }

    /// True when this value lies beyond the last representable clock time,
    /// i.e. an addition ran past midnight.
    pub fn overflowed(self) -> bool {
        self.minutes >= MINUTES_PER_DAY
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        TimeOfDay::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// A positive length of time in whole minutes.
///
/// Used for service lengths, occupied-interval lengths and the slot
/// granularity. Construction is the single validation point for
/// durations: zero and negative minute counts fail with
/// [`SchedulingError::InvalidDuration`], so downstream code never has
/// to re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ServiceDuration {
    minutes: u32,
}

impl ServiceDuration {
    pub fn from_minutes(minutes: i64) -> Result<Self, SchedulingError> {
        if minutes <= 0 {
            return Err(SchedulingError::InvalidDuration(minutes));
        }
        let minutes =
            u32::try_from(minutes).map_err(|_| SchedulingError::InvalidDuration(minutes))?;
        Ok(ServiceDuration { minutes })
    }

    pub fn minutes(self) -> u32 {
        self.minutes
    }
}

impl TryFrom<i64> for ServiceDuration {
    type Error = SchedulingError;

    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        ServiceDuration::from_minutes(minutes)
    }
}

impl From<ServiceDuration> for i64 {
    fn from(duration: ServiceDuration) -> i64 {
        i64::from(duration.minutes)
    }
}

impl fmt::Display for ServiceDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes)
    }
}
