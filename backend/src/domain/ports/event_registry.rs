//! Driving port for event creation and reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Error, Event, EventDetails, EventDraft, EventId};

/// Use-cases for creating and reading events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRegistry: Send + Sync {
    /// Validate a creation draft, persist the event, and return its fresh
    /// identifier.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] carrying every violated rule when the draft is
    /// malformed.
    async fn create_event(&self, draft: EventDraft) -> Result<EventId, Error>;

    /// Fetch an event and its registered attendees.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no event has that identity.
    async fn event_details(&self, event_id: EventId) -> Result<EventDetails, Error>;

    /// List events scheduled strictly after `now`, soonest first, ties
    /// broken by location ascending.
    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Event>, Error>;
}

/// Fixture implementation for transport tests that never touch storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventRegistry;

#[async_trait]
impl EventRegistry for FixtureEventRegistry {
    async fn create_event(&self, draft: EventDraft) -> Result<EventId, Error> {
        Event::new(&draft)
            .map(|event| event.id())
            .map_err(|violations| {
                Error::validation(violations.iter().map(ToString::to_string).collect())
            })
    }

    async fn event_details(&self, event_id: EventId) -> Result<EventDetails, Error> {
        Err(Error::not_found(format!("Event {event_id} not found")))
    }

    async fn list_upcoming(&self, _now: DateTime<Utc>) -> Result<Vec<Event>, Error> {
        Ok(Vec::new())
    }
}
