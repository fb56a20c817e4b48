//! Driving port for capacity-utilisation metrics.

use async_trait::async_trait;

use crate::domain::{Error, EventId, EventStatsReport};

/// Use-case for reading an event's registration statistics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStats: Send + Sync {
    /// Derive total, remaining, and percentage-used figures for an event.
    ///
    /// The figures are a snapshot; they are not transactionally linked to
    /// concurrent registrations.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the event does not exist.
    async fn event_stats(&self, event_id: EventId) -> Result<EventStatsReport, Error>;
}

/// Fixture implementation for transport tests that never touch storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventStats;

#[async_trait]
impl EventStats for FixtureEventStats {
    async fn event_stats(&self, _event_id: EventId) -> Result<EventStatsReport, Error> {
        Ok(EventStatsReport {
            total_registrations: 0,
            remaining_capacity: 0,
            percentage_used: 0.0,
        })
    }
}
