// --- File: crates/trimly_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the external services the
//! scheduling engine depends on. The traits allow for dependency injection
//! and easier testing by decoupling the scheduling logic from any specific
//! storage backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for booking storage operations.
///
/// This trait defines the operations the scheduling engine performs against
/// the persistence layer: reading the intervals already booked for a
/// professional on a date, and writing a booking once the conflict guard
/// has accepted it. The store is the final backstop against double
/// booking — a unique constraint or transactional check on its side is
/// expected to reject whatever slips through the guard's re-validation
/// window.
pub trait BookingStore: Send + Sync {
    /// Error type returned by storage operations.
    type Error: StdError + Send + Sync + 'static;

    /// Existing bookings for one professional on one date.
    ///
    /// Start times come back as "HH:MM" (24h) strings in business-local
    /// time, the format the tenant database stores them in.
    fn booked_intervals(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> BoxFuture<'_, Vec<BookedInterval>, Self::Error>;

    /// Persist a booking the conflict guard has accepted.
    fn create_booking(&self, booking: NewBooking) -> BoxFuture<'_, BookingRecord, Self::Error>;

    /// Cancel an existing booking, freeing its interval.
    fn cancel_booking(&self, booking_id: &str) -> BoxFuture<'_, (), Self::Error>;
}

/// One already-booked interval as the store reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedInterval {
    /// Start time in "HH:MM" (24h) business-local time.
    pub start_time: String,
    /// Length of the booking in minutes.
    pub duration_minutes: i64,
}

/// A booking to be written after acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    /// The professional the booking is for.
    pub professional_id: Uuid,
    /// The calendar date of the booking.
    pub date: NaiveDate,
    /// Start time in "HH:MM" (24h) business-local time.
    pub start_time: String,
    /// Length of the booking in minutes.
    pub duration_minutes: i64,
    /// Optional display name of the client.
    pub client_name: Option<String>,
    /// Optional name of the booked service.
    pub service_name: Option<String>,
}

/// Represents the result of a booking write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    /// The ID assigned to the booking by the store.
    pub booking_id: String,
    /// The status of the booking ("confirmed", "cancelled", etc.).
    pub status: String,
}
