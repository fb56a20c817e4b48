//! Driving port for registration and cancellation.

use async_trait::async_trait;

use crate::domain::{AttendeeRef, Error, EventId, RegistrationReceipt, UserId};

/// Use-cases for taking and releasing seats.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// Register an attendee for an event under the capacity limit.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an unknown event, [`Error::InvalidState`] for
    /// a past event, [`Error::Conflict`] for a duplicate registration, and
    /// [`Error::CapacityExceeded`] when the event is full.
    async fn register(
        &self,
        event_id: EventId,
        attendee: AttendeeRef,
    ) -> Result<RegistrationReceipt, Error>;

    /// Cancel the registration binding (event, user).
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no such registration exists.
    async fn cancel(&self, event_id: EventId, user_id: UserId) -> Result<(), Error>;
}

/// Fixture implementation for transport tests that never touch storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegistrationCommand;

#[async_trait]
impl RegistrationCommand for FixtureRegistrationCommand {
    async fn register(
        &self,
        event_id: EventId,
        attendee: AttendeeRef,
    ) -> Result<RegistrationReceipt, Error> {
        let user_id = match attendee {
            AttendeeRef::Existing(user_id) => user_id,
            AttendeeRef::ByEmail { .. } => UserId::random(),
        };
        Ok(RegistrationReceipt {
            registration_id: crate::domain::RegistrationId::random(),
            event_id,
            user_id,
        })
    }

    async fn cancel(&self, _event_id: EventId, _user_id: UserId) -> Result<(), Error> {
        Ok(())
    }
}
