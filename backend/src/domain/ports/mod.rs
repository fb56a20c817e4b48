//! Domain ports.
//!
//! Driving ports ([`EventRegistry`], [`RegistrationCommand`], [`EventStats`])
//! are the use-case traits the HTTP adapter depends on. Driven ports
//! ([`EventRepository`], [`RegistrationStore`]) are implemented by the
//! persistence adapters. Fixture implementations back transport tests that
//! do not exercise storage.

mod event_registry;
mod event_repository;
mod event_stats;
mod macros;
mod registration_command;
mod registration_store;

pub use event_registry::{EventRegistry, FixtureEventRegistry};
pub use event_repository::{EventRepository, EventRepositoryError};
pub use event_stats::{EventStats, FixtureEventStats};
pub use registration_command::{FixtureRegistrationCommand, RegistrationCommand};
pub use registration_store::{RegistrationStore, RegistrationStoreError};

#[cfg(test)]
pub use event_registry::MockEventRegistry;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use event_stats::MockEventStats;
#[cfg(test)]
pub use registration_command::MockRegistrationCommand;
#[cfg(test)]
pub use registration_store::MockRegistrationStore;
