//! PostgreSQL-backed `EventRepository` implementation using Diesel ORM.
//!
//! A thin adapter: it translates between Diesel rows and domain types and
//! maps storage failures onto the port's error variants. The snapshot reads
//! here run outside the registration transaction on purpose.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Event, EventDetails, EventId, RegistrationTotals, User};

use super::diesel_error;
use super::models::{EventRow, NewEventRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{events, registrations, users};

/// Diesel-backed implementation of the event repository port.
#[derive(Debug, Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EventRepositoryError {
    diesel_error::map_pool_error(error, EventRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EventRepositoryError {
    diesel_error::map_diesel_error(
        error,
        EventRepositoryError::query,
        EventRepositoryError::connection,
    )
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn insert(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewEventRow {
            id: *event.id().as_uuid(),
            title: event.title(),
            event_datetime: event.event_datetime(),
            location: event.location(),
            capacity: event.capacity(),
        };

        diesel::insert_into(events::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_with_attendees(
        &self,
        event_id: EventId,
    ) -> Result<Option<EventDetails>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = events::table
            .find(event_id.as_uuid())
            .select(EventRow::as_select())
            .first::<EventRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let attendees: Vec<UserRow> = registrations::table
            .inner_join(users::table)
            .filter(registrations::event_id.eq(event_id.as_uuid()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(EventDetails {
            event: Event::from(row),
            attendees: attendees.into_iter().map(User::from).collect(),
        }))
    }

    async fn list_after(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EventRow> = events::table
            .filter(events::event_datetime.gt(cutoff))
            .order((events::event_datetime.asc(), events::location.asc()))
            .select(EventRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn registration_totals(
        &self,
        event_id: EventId,
    ) -> Result<Option<RegistrationTotals>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let capacity = events::table
            .find(event_id.as_uuid())
            .select(events::capacity)
            .first::<i32>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(capacity) = capacity else {
            return Ok(None);
        };

        let total: i64 = registrations::table
            .filter(registrations::event_id.eq(event_id.as_uuid()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(RegistrationTotals { capacity, total }))
    }
}
