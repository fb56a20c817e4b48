//! Driven port for event persistence and snapshot reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Event, EventDetails, EventId, RegistrationTotals};

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by event repository adapters.
    pub enum EventRepositoryError {
        /// Repository connection could not be established or checked out.
        Connection { message: String } =>
            "event repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "event repository query failed: {message}",
    }
}

/// Port for writing events and reading event-scoped snapshots.
///
/// Reads here are deliberately not transactional with concurrent
/// registrations: details and totals are point-in-time snapshots and callers
/// must tolerate staleness.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a newly created event.
    async fn insert(&self, event: &Event) -> Result<(), EventRepositoryError>;

    /// Fetch an event together with its registered attendees.
    async fn find_with_attendees(
        &self,
        event_id: EventId,
    ) -> Result<Option<EventDetails>, EventRepositoryError>;

    /// List events scheduled strictly after `cutoff`, ordered by scheduled
    /// time ascending, ties broken by location ascending.
    async fn list_after(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, EventRepositoryError>;

    /// Read an event's capacity and current registration count in one
    /// snapshot. Returns `None` when the event does not exist.
    async fn registration_totals(
        &self,
        event_id: EventId,
    ) -> Result<Option<RegistrationTotals>, EventRepositoryError>;
}
