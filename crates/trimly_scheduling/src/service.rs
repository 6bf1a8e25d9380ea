// --- File: crates/trimly_scheduling/src/service.rs ---
//! Fetch-then-validate orchestration over the booking store.
//!
//! The core algorithms in this crate are pure; everything that touches
//! I/O lives here. A [`SchedulingService`] fetches occupancy snapshots
//! from a [`BookingStore`], runs the pure functions over them, and only
//! writes through the store after the conflict guard accepts.

use crate::dates::{selectable_dates, CandidateDate};
use crate::error::SchedulingError;
use crate::guard::{self, BookingDecision, BookingRequest, RejectReason};
use crate::occupancy::OccupancyIndex;
use crate::rules::AvailabilityRules;
use crate::slots::{generate_day_slots, Slot};
use crate::time::ServiceDuration;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tracing::{debug, info};
use trimly_common::services::{BookingRecord, BookingStore, NewBooking};
use trimly_config::AppConfig;
use uuid::Uuid;

/// Errors from the orchestration layer: either the caller's input was
/// invalid, or the booking store failed.
#[derive(Debug, Error)]
pub enum BookingServiceError<E: std::error::Error + Send + Sync + 'static> {
    #[error(transparent)]
    Scheduling(#[from] SchedulingError),
    #[error("Booking store error: {0}")]
    Store(#[source] E),
}

/// Result of a booking attempt that made it through input validation.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    /// The guard accepted and the store persisted the booking.
    Confirmed(BookingRecord),
    /// The guard rejected; nothing was written.
    Rejected(RejectReason),
}

/// Scheduling front door for one tenant.
///
/// Conflict avoidance here is best-effort, not linearizable: between
/// the occupancy fetch and the store write another booking can still
/// land. The store's own constraint check is the final backstop.
pub struct SchedulingService<S: BookingStore> {
    store: S,
    rules: AvailabilityRules,
    horizon_days: u32,
    timezone: Tz,
}

impl<S: BookingStore> SchedulingService<S> {
    pub fn new(store: S, rules: AvailabilityRules, horizon_days: u32, timezone: Tz) -> Self {
        SchedulingService {
            store,
            rules,
            horizon_days,
            timezone,
        }
    }

    /// Wires a service from the raw tenant configuration blob,
    /// rejecting malformed values before they reach the algorithms.
    pub fn from_config(store: S, config: &AppConfig) -> Result<Self, SchedulingError> {
        let rules = AvailabilityRules::from_config(&config.schedule)?;
        let timezone: Tz = config.booking.timezone.parse().map_err(|_| {
            SchedulingError::InvalidConfiguration(format!(
                "unknown timezone: {:?}",
                config.booking.timezone
            ))
        })?;
        Ok(SchedulingService::new(
            store,
            rules,
            config.booking.horizon_days,
            timezone,
        ))
    }

    pub fn rules(&self) -> &AvailabilityRules {
        &self.rules
    }

    /// The business-local calendar date for an injected UTC instant.
    ///
    /// "Now" is always a parameter, never read from a global clock, so
    /// every query through this service is a deterministic function of
    /// its inputs.
    pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.timezone).date_naive()
    }

    /// The booking-horizon calendar: every date in
    /// `[today, today + horizon_days]` tagged selectable or not.
    pub fn selectable_dates(&self, now: DateTime<Utc>) -> Vec<CandidateDate> {
        selectable_dates(self.local_date(now), self.horizon_days, &self.rules)
    }

    /// The tagged slot list for one professional and date.
    pub async fn day_slots(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
        duration_minutes: i64,
    ) -> Result<Vec<Slot>, BookingServiceError<S::Error>> {
        let duration = ServiceDuration::from_minutes(duration_minutes)?;
        let occupancy = self.fetch_occupancy(professional_id, date).await?;
        Ok(generate_day_slots(date, duration, &self.rules, &occupancy))
    }

    /// Re-validates against a fresh occupancy snapshot and persists only
    /// on acceptance.
    ///
    /// The rejection branch carries the reason so the caller can message
    /// it ("that time conflicts with another booking", "we are closed
    /// that day", ...).
    pub async fn book(
        &self,
        request: BookingRequest,
        client_name: Option<String>,
        service_name: Option<String>,
    ) -> Result<BookingOutcome, BookingServiceError<S::Error>> {
        let occupancy = self
            .fetch_occupancy(request.professional_id, request.date)
            .await?;

        match guard::validate(&request, &occupancy, &self.rules) {
            BookingDecision::Accept => {
                let record = self
                    .store
                    .create_booking(NewBooking {
                        professional_id: request.professional_id,
                        date: request.date,
                        start_time: request.start_time.to_string(),
                        duration_minutes: i64::from(request.duration.minutes()),
                        client_name,
                        service_name,
                    })
                    .await
                    .map_err(BookingServiceError::Store)?;
                info!(
                    "Booking {} confirmed for {} at {}",
                    record.booking_id, request.date, request.start_time
                );
                Ok(BookingOutcome::Confirmed(record))
            }
            BookingDecision::Reject { reason } => Ok(BookingOutcome::Rejected(reason)),
        }
    }

    /// Cancels an existing booking, freeing its interval.
    pub async fn cancel(&self, booking_id: &str) -> Result<(), BookingServiceError<S::Error>> {
        self.store
            .cancel_booking(booking_id)
            .await
            .map_err(BookingServiceError::Store)?;
        info!("Booking {} cancelled", booking_id);
        Ok(())
    }

    async fn fetch_occupancy(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<OccupancyIndex, BookingServiceError<S::Error>> {
        let bookings = self
            .store
            .booked_intervals(professional_id, date)
            .await
            .map_err(BookingServiceError::Store)?;
        debug!(
            "Loaded {} existing bookings for {} on {}",
            bookings.len(),
            professional_id,
            date
        );
        Ok(OccupancyIndex::from_bookings(&bookings)?)
    }
}
