//! Internal Diesel row structs.
//!
//! Implementation details of the persistence layer, never exposed to the
//! domain. Repositories translate between these rows and domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Event, EventId, User, UserId};

use super::schema::{events, registrations, users};

/// Row struct for reading from the events table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub event_datetime: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event::from_stored(
            EventId::from_uuid(row.id),
            row.title,
            row.event_datetime,
            row.location,
            row.capacity,
        )
    }
}

/// Insertable struct for creating new event records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub(crate) struct NewEventRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub event_datetime: DateTime<Utc>,
    pub location: &'a str,
    pub capacity: i32,
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::from_uuid(row.id), row.name, row.email)
    }
}

/// Insertable struct for lazily creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: Option<&'a str>,
    pub email: &'a str,
}

/// Insertable struct for creating registration records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = registrations)]
pub(crate) struct NewRegistrationRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
}
