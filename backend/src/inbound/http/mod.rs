//! Inbound HTTP adapter built on actix-web.
//!
//! Handlers translate JSON requests into driving-port calls and map domain
//! errors onto HTTP statuses via the [`error`] module. They never touch
//! storage directly.

pub mod error;
pub mod events;
pub mod health;
pub mod registrations;
pub mod schemas;
pub mod state;
pub mod stats;
pub(crate) mod validation;

pub use self::error::ApiResult;
pub use self::state::HttpState;

use actix_web::web;

use crate::domain::Error;

/// JSON extractor configuration routing payload failures through the
/// validation envelope.
///
/// Without this, a body field of the wrong JSON type (say a fractional
/// capacity) would surface as actix's default plain-text 400 instead of
/// `{"errors": [...]}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::validation(vec![format!("invalid request body: {err}")]).into()
    })
}

/// Mount every event-scoped route under `/api/events`.
pub fn event_scope() -> actix_web::Scope {
    web::scope("/api/events")
        .service(events::create_event)
        .service(events::list_upcoming_events)
        .service(registrations::register_for_event)
        .service(registrations::cancel_registration)
        .service(stats::get_event_stats)
        .service(events::get_event_details)
}
