// --- File: crates/trimly_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Operating Hours Config ---
// Raw per-tenant operating hours, exactly as the tenant configuration
// store hands them out. Times are "HH:MM" strings and weekdays are
// lowercase English names; nothing here is validated. The scheduling
// crate converts this blob into typed availability rules and rejects
// malformed values at that boundary.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduleConfig {
    pub open_time: String,  // e.g. "09:00"
    pub close_time: String, // e.g. "18:00"
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
    /// Weekday names ("mon".."sun" or full English names).
    pub open_weekdays: Vec<String>,
    /// Step between candidate slot start times, in minutes.
    #[serde(default = "default_slot_granularity")]
    pub slot_granularity_minutes: i64,
}

fn default_slot_granularity() -> i64 {
    20
}

// --- Booking Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// How many days ahead a client may book, today inclusive.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// IANA timezone the business operates in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_horizon_days() -> u32 {
    15
}

fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            horizon_days: default_horizon_days(),
            timezone: default_timezone(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Operating hours are mandatory
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub booking: BookingConfig,
}
