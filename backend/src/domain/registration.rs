//! Registration join entity and related value objects.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::{Event, EventId};
use super::user::{User, UserId};

/// Stable registration identifier stored as a UUID v4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(Uuid);

impl RegistrationId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, typically one read back from storage.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Borrow the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outcome of a successful registration: the new registration identity plus
/// the event and resolved user it binds together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationReceipt {
    /// Identity of the newly inserted registration.
    pub registration_id: RegistrationId,
    /// The event registered for.
    pub event_id: EventId,
    /// The attendee, resolved from either an explicit id or an email lookup.
    pub user_id: UserId,
}

/// An event together with its currently registered attendees.
///
/// This is a plain snapshot read; it is not transactionally linked to
/// in-flight registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    /// The event record.
    pub event: Event,
    /// Attendees holding an active registration, in storage order.
    pub attendees: Vec<User>,
}

/// Current registration count alongside the event's capacity, as read in a
/// single snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationTotals {
    /// Maximum number of active registrations the event permits.
    pub capacity: i32,
    /// Number of active registrations at the time of the read.
    pub total: i64,
}

/// Capacity-utilisation metrics derived from [`RegistrationTotals`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventStatsReport {
    /// Number of active registrations.
    pub total_registrations: i64,
    /// Seats still available (`capacity - total`).
    pub remaining_capacity: i64,
    /// `total / capacity * 100`, rounded half away from zero to two decimal
    /// places.
    pub percentage_used: f64,
}

impl RegistrationTotals {
    /// Derive the utilisation report.
    ///
    /// Rounding is half away from zero to two decimals, so one registration
    /// out of three seats reports `33.33` and one out of eight reports
    /// `12.5`.
    pub fn report(&self) -> EventStatsReport {
        let capacity = i64::from(self.capacity);
        #[expect(
            clippy::cast_precision_loss,
            reason = "totals are bounded by the 1..=1000 capacity range"
        )]
        let ratio = self.total as f64 / capacity as f64;
        EventStatsReport {
            total_registrations: self.total,
            remaining_capacity: capacity - self.total,
            percentage_used: (ratio * 10_000.0).round() / 100.0,
        }
    }
}
