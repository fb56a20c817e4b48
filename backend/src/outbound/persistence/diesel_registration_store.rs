//! PostgreSQL-backed `RegistrationStore` implementation using Diesel ORM.
//!
//! Both operations run inside a single database transaction. `register`
//! opens by selecting the event row `FOR UPDATE`, so every concurrent
//! attempt against the same event queues behind that lock and the duplicate
//! and capacity checks observe a settled registration count. Returning any
//! error from the transaction closure rolls the whole transaction back, so a
//! failed registration leaves no user or registration rows behind.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{RegistrationStore, RegistrationStoreError};
use crate::domain::{
    AttendeeRef, EventId, RegistrationId, RegistrationReceipt, UserId,
};

use super::diesel_error;
use super::models::{EventRow, NewRegistrationRow, NewUserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{events, registrations, users};

/// Diesel-backed implementation of the registration store port.
#[derive(Debug, Clone)]
pub struct DieselRegistrationStore {
    pool: DbPool,
}

impl DieselRegistrationStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RegistrationStoreError {
    diesel_error::map_pool_error(error, RegistrationStoreError::connection)
}

/// Conversion used by `?` inside the transaction closures.
///
/// Constraint violations carry domain meaning here: the registrations
/// unique index means a duplicate registration, and a foreign key failure
/// means the caller supplied a user id that does not exist.
impl From<diesel::result::Error> for RegistrationStoreError {
    fn from(error: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                debug!(message = info.message(), "unique constraint violated");
                Self::AlreadyRegistered
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                debug!(message = info.message(), "foreign key constraint violated");
                Self::UnknownUser
            }
            other => diesel_error::map_diesel_error(other, Self::query, Self::connection),
        }
    }
}

/// Resolve the attendee to a stored user id inside the open transaction.
///
/// An explicit id is trusted as-is; the registration insert's foreign key
/// is the only existence check. An email is looked up and lazily inserted:
/// the `ON CONFLICT DO NOTHING` plus re-select pair stays correct when two
/// transactions race on the same address across different events.
async fn resolve_user_id(
    conn: &mut diesel_async::AsyncPgConnection,
    attendee: AttendeeRef,
) -> Result<Uuid, RegistrationStoreError> {
    match attendee {
        AttendeeRef::Existing(user_id) => Ok(*user_id.as_uuid()),
        AttendeeRef::ByEmail { name, email } => {
            diesel::insert_into(users::table)
                .values(&NewUserRow {
                    id: Uuid::new_v4(),
                    name: name.as_deref(),
                    email: &email,
                })
                .on_conflict(users::email)
                .do_nothing()
                .execute(conn)
                .await?;

            let user_id = users::table
                .filter(users::email.eq(&email))
                .select(users::id)
                .first::<Uuid>(conn)
                .await?;

            Ok(user_id)
        }
    }
}

#[async_trait]
impl RegistrationStore for DieselRegistrationStore {
    async fn register(
        &self,
        event_id: EventId,
        attendee: AttendeeRef,
        now: DateTime<Utc>,
    ) -> Result<RegistrationReceipt, RegistrationStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction::<RegistrationReceipt, RegistrationStoreError, _>(|conn| {
            async move {
                // Exclusive lock on the event row for the rest of the
                // transaction; concurrent registrations for this event
                // serialise here.
                let event = events::table
                    .find(event_id.as_uuid())
                    .select(EventRow::as_select())
                    .for_update()
                    .first::<EventRow>(conn)
                    .await
                    .optional()?
                    .ok_or(RegistrationStoreError::EventNotFound)?;

                if event.event_datetime <= now {
                    return Err(RegistrationStoreError::EventEnded);
                }

                let user_id = resolve_user_id(conn, attendee).await?;

                let already_registered = diesel::select(diesel::dsl::exists(
                    registrations::table
                        .filter(registrations::event_id.eq(event_id.as_uuid()))
                        .filter(registrations::user_id.eq(user_id)),
                ))
                .get_result::<bool>(conn)
                .await?;
                if already_registered {
                    return Err(RegistrationStoreError::AlreadyRegistered);
                }

                let total: i64 = registrations::table
                    .filter(registrations::event_id.eq(event_id.as_uuid()))
                    .count()
                    .get_result(conn)
                    .await?;
                if total >= i64::from(event.capacity) {
                    return Err(RegistrationStoreError::EventFull);
                }

                let registration_id = Uuid::new_v4();
                diesel::insert_into(registrations::table)
                    .values(&NewRegistrationRow {
                        id: registration_id,
                        event_id: *event_id.as_uuid(),
                        user_id,
                    })
                    .execute(conn)
                    .await?;

                Ok(RegistrationReceipt {
                    registration_id: RegistrationId::from_uuid(registration_id),
                    event_id,
                    user_id: UserId::from_uuid(user_id),
                })
            }
            .scope_boxed()
        })
        .await
    }

    async fn cancel(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), RegistrationStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction::<(), RegistrationStoreError, _>(|conn| {
            async move {
                let registration_id = registrations::table
                    .filter(registrations::event_id.eq(event_id.as_uuid()))
                    .filter(registrations::user_id.eq(user_id.as_uuid()))
                    .select(registrations::id)
                    .for_update()
                    .first::<Uuid>(conn)
                    .await
                    .optional()?
                    .ok_or(RegistrationStoreError::RegistrationNotFound)?;

                diesel::delete(registrations::table.find(registration_id))
                    .execute(conn)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
