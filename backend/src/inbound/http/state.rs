//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they only
//! depend on domain driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EventRegistry, EventStats, RegistrationCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Event creation and read use-cases.
    pub events: Arc<dyn EventRegistry>,
    /// Registration and cancellation use-cases.
    pub registrations: Arc<dyn RegistrationCommand>,
    /// Capacity-utilisation read use-case.
    pub stats: Arc<dyn EventStats>,
}

impl std::fmt::Debug for HttpState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpState").finish_non_exhaustive()
    }
}

impl HttpState {
    /// Construct state from its three port implementations.
    pub fn new(
        events: Arc<dyn EventRegistry>,
        registrations: Arc<dyn RegistrationCommand>,
        stats: Arc<dyn EventStats>,
    ) -> Self {
        Self {
            events,
            registrations,
            stats,
        }
    }
}
