//! Driven port for the seat-reservation transaction.
//!
//! Implementations must execute each operation as a single storage
//! transaction that takes an exclusive lock on the target event row for its
//! whole duration. That lock is the system's central concurrency-correctness
//! mechanism: it totally orders registration and cancellation attempts per
//! event, so the duplicate and capacity checks cannot race. Any failure must
//! roll the transaction back in full, leaving no partial writes (no user
//! created, no registration inserted).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{AttendeeRef, EventId, RegistrationReceipt, UserId};

use super::macros::define_port_error;

define_port_error! {
    /// Outcomes of the registration transaction other than success.
    ///
    /// The first five variants are ordinary domain outcomes detected inside
    /// the transaction; the last two are storage failures.
    pub enum RegistrationStoreError {
        /// The target event does not exist.
        EventNotFound => "event not found",
        /// The event's scheduled time is at or before the current time.
        EventEnded => "cannot register for a past event",
        /// A registration for (event, user) already exists.
        AlreadyRegistered => "user is already registered for this event",
        /// The registration count has reached the event's capacity.
        EventFull => "event is full",
        /// An explicitly supplied user id references no stored user. Raised
        /// by the schema's foreign key, not by an application-level check.
        UnknownUser => "referenced user does not exist",
        /// No registration exists for (event, user) to cancel.
        RegistrationNotFound => "registration not found",
        /// Store connection could not be established or checked out.
        Connection { message: String } =>
            "registration store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "registration store query failed: {message}",
    }
}

/// Port executing the capacity-safe registration protocol.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Register an attendee for an event.
    ///
    /// Within one transaction holding the event row lock: verify the event
    /// exists and lies in the future of `now`, resolve the attendee (reusing
    /// or lazily creating a user for [`AttendeeRef::ByEmail`]), reject
    /// duplicates, enforce capacity, then insert the registration.
    async fn register(
        &self,
        event_id: EventId,
        attendee: AttendeeRef,
        now: DateTime<Utc>,
    ) -> Result<RegistrationReceipt, RegistrationStoreError>;

    /// Delete the registration binding (event, user), taking an exclusive
    /// lock on the registration row first. No capacity re-check: deletion
    /// only frees seats.
    async fn cancel(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), RegistrationStoreError>;
}
