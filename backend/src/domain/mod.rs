//! Domain entities, validators, ports, and services.
//!
//! Everything here is transport and storage agnostic. The HTTP adapter
//! depends on the driving ports in [`ports`]; the persistence adapters
//! implement the driven ports there.

pub mod error;
pub mod event;
pub mod event_service;
pub mod ports;
pub mod registration;
pub mod registration_service;
pub mod stats_service;
pub mod user;

pub use self::error::Error;
pub use self::event::{Event, EventDraft, EventId, EventValidationError, MAX_CAPACITY, MIN_CAPACITY};
pub use self::event_service::EventRegistryService;
pub use self::registration::{
    EventDetails, EventStatsReport, RegistrationId, RegistrationReceipt, RegistrationTotals,
};
pub use self::registration_service::RegistrationCoordinator;
pub use self::stats_service::StatsService;
pub use self::user::{AttendeeRef, User, UserId};
