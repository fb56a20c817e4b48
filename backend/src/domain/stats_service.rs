//! Stats aggregator.
//!
//! Implements the [`EventStats`] driving port by reading a registration
//! snapshot through the [`EventRepository`] port and deriving utilisation
//! figures from it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{EventRepository, EventRepositoryError, EventStats};
use crate::domain::{Error, EventId, EventStatsReport};

fn map_repository_error(error: EventRepositoryError) -> Error {
    match error {
        EventRepositoryError::Connection { message } => {
            Error::unavailable(format!("event repository unavailable: {message}"))
        }
        EventRepositoryError::Query { message } => {
            Error::internal(format!("event repository error: {message}"))
        }
    }
}

/// Stats aggregator backed by a repository port.
#[derive(Clone)]
pub struct StatsService<R> {
    events: Arc<R>,
}

impl<R> std::fmt::Debug for StatsService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsService").finish_non_exhaustive()
    }
}

impl<R> StatsService<R> {
    /// Create a new service with the given event repository.
    pub fn new(events: Arc<R>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> EventStats for StatsService<R>
where
    R: EventRepository,
{
    async fn event_stats(&self, event_id: EventId) -> Result<EventStatsReport, Error> {
        let totals = self
            .events
            .registration_totals(event_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Event not found"))?;

        Ok(totals.report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegistrationTotals;
    use crate::domain::ports::MockEventRepository;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn stats_derive_report_from_totals() {
        let mut repo = MockEventRepository::new();
        repo.expect_registration_totals().returning(|_| {
            Ok(Some(RegistrationTotals {
                capacity: 4,
                total: 1,
            }))
        });

        let service = StatsService::new(Arc::new(repo));
        let report = service
            .event_stats(EventId::random())
            .await
            .expect("stats available");

        assert_eq!(report.total_registrations, 1);
        assert_eq!(report.remaining_capacity, 3);
        assert!((report.percentage_used - 25.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_event_maps_to_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_registration_totals().returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(repo));
        let err = service
            .event_stats(EventId::random())
            .await
            .expect_err("missing event must fail");
        assert!(matches!(err, Error::NotFound { .. }));
    }
}
