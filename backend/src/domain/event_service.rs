//! Event registry service.
//!
//! Implements the [`EventRegistry`] driving port on top of an
//! [`EventRepository`] adapter: validation at the boundary, storage errors
//! mapped to domain errors, nothing else.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::ports::{EventRegistry, EventRepository, EventRepositoryError};
use crate::domain::{Error, Event, EventDetails, EventDraft, EventId};

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

/// Event registry backed by a repository port.
#[derive(Clone)]
pub struct EventRegistryService<R> {
    events: Arc<R>,
}

impl<R> std::fmt::Debug for EventRegistryService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistryService").finish_non_exhaustive()
    }
}

impl<R> EventRegistryService<R> {
    /// Create a new service with the given event repository.
    pub fn new(events: Arc<R>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> EventRegistry for EventRegistryService<R>
where
    R: EventRepository,
{
    async fn create_event(&self, draft: EventDraft) -> Result<EventId, Error> {
        let event = Event::new(&draft).map_err(|violations| {
            Error::validation(violations.iter().map(ToString::to_string).collect())
        })?;

        self.events
            .insert(&event)
            .await
            .map_err(map_repository_error)?;

        info!(event_id = %event.id(), title = event.title(), "event created");
        Ok(event.id())
    }

    async fn event_details(&self, event_id: EventId) -> Result<EventDetails, Error> {
        self.events
            .find_with_attendees(event_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Event not found"))
    }

    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Event>, Error> {
        self.events
            .list_after(now)
            .await
            .map_err(map_repository_error)
    }
}
