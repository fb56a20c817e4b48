//! Registration coordinator.
//!
//! Implements the [`RegistrationCommand`] driving port. The concurrency
//! protocol itself (event row lock, duplicate check, capacity check) lives
//! behind the [`RegistrationStore`] port; this service supplies the clock,
//! maps transaction outcomes onto domain errors, and logs the result.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::ports::{RegistrationCommand, RegistrationStore, RegistrationStoreError};
use crate::domain::{AttendeeRef, Error, EventId, RegistrationReceipt, UserId};

fn map_store_error(error: RegistrationStoreError) -> Error {
    match error {
        RegistrationStoreError::EventNotFound => Error::not_found("Event not found"),
        RegistrationStoreError::EventEnded => {
            Error::invalid_state("Cannot register for past event")
        }
        RegistrationStoreError::AlreadyRegistered => Error::conflict("Already registered"),
        RegistrationStoreError::EventFull => Error::capacity_exceeded("Event is full"),
        RegistrationStoreError::UnknownUser => {
            Error::validation(vec!["userId does not reference an existing user".into()])
        }
        RegistrationStoreError::RegistrationNotFound => Error::not_found("Registration not found"),
        RegistrationStoreError::Connection { message } => {
            Error::unavailable(format!("registration store unavailable: {message}"))
        }
        RegistrationStoreError::Query { message } => {
            Error::internal(format!("registration store error: {message}"))
        }
    }
}

/// Registration coordinator backed by a transactional store port.
#[derive(Clone)]
pub struct RegistrationCoordinator<S> {
    store: Arc<S>,
}

impl<S> std::fmt::Debug for RegistrationCoordinator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationCoordinator").finish_non_exhaustive()
    }
}

impl<S> RegistrationCoordinator<S> {
    /// Create a new coordinator with the given registration store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> RegistrationCommand for RegistrationCoordinator<S>
where
    S: RegistrationStore,
{
    async fn register(
        &self,
        event_id: EventId,
        attendee: AttendeeRef,
    ) -> Result<RegistrationReceipt, Error> {
        let receipt = self
            .store
            .register(event_id, attendee, Utc::now())
            .await
            .map_err(map_store_error)?;

        info!(
            registration_id = %receipt.registration_id,
            event_id = %receipt.event_id,
            user_id = %receipt.user_id,
            "registration created"
        );
        Ok(receipt)
    }

    async fn cancel(&self, event_id: EventId, user_id: UserId) -> Result<(), Error> {
        self.store
            .cancel(event_id, user_id)
            .await
            .map_err(map_store_error)?;

        info!(%event_id, %user_id, "registration cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegistrationId;
    use crate::domain::ports::MockRegistrationStore;
    use rstest::rstest;

    #[rstest]
    #[case(RegistrationStoreError::event_not_found(), Error::not_found("Event not found"))]
    #[case(
        RegistrationStoreError::event_ended(),
        Error::invalid_state("Cannot register for past event")
    )]
    #[case(
        RegistrationStoreError::already_registered(),
        Error::conflict("Already registered")
    )]
    #[case(
        RegistrationStoreError::event_full(),
        Error::capacity_exceeded("Event is full")
    )]
    #[case(
        RegistrationStoreError::registration_not_found(),
        Error::not_found("Registration not found")
    )]
    fn store_outcomes_map_to_domain_errors(
        #[case] store_error: RegistrationStoreError,
        #[case] expected: Error,
    ) {
        assert_eq!(map_store_error(store_error), expected);
    }

    #[rstest]
    fn storage_failures_keep_their_class() {
        assert!(matches!(
            map_store_error(RegistrationStoreError::connection("refused")),
            Error::Unavailable { .. }
        ));
        assert!(matches!(
            map_store_error(RegistrationStoreError::query("bad sql")),
            Error::Internal { .. }
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn register_passes_through_receipt() {
        let event_id = EventId::random();
        let user_id = UserId::random();
        let registration_id = RegistrationId::random();

        let mut store = MockRegistrationStore::new();
        store.expect_register().times(1).returning(move |event_id, _, _| {
            Ok(RegistrationReceipt {
                registration_id,
                event_id,
                user_id,
            })
        });

        let coordinator = RegistrationCoordinator::new(Arc::new(store));
        let receipt = coordinator
            .register(event_id, AttendeeRef::Existing(user_id))
            .await
            .expect("registration succeeds");

        assert_eq!(receipt.registration_id, registration_id);
        assert_eq!(receipt.event_id, event_id);
        assert_eq!(receipt.user_id, user_id);
    }

    #[rstest]
    #[tokio::test]
    async fn cancel_maps_missing_registration_to_not_found() {
        let mut store = MockRegistrationStore::new();
        store
            .expect_cancel()
            .returning(|_, _| Err(RegistrationStoreError::registration_not_found()));

        let coordinator = RegistrationCoordinator::new(Arc::new(store));
        let err = coordinator
            .cancel(EventId::random(), UserId::random())
            .await
            .expect_err("missing registration must fail");
        assert_eq!(err, Error::not_found("Registration not found"));
    }
}
