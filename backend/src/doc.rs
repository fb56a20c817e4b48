//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API from the
//! `#[utoipa::path]` annotations on the inbound handlers. Swagger UI serves
//! it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::events::{
    AttendeeBody, CreateEventRequestBody, CreateEventResponseBody, EventBody,
    EventDetailsResponseBody, ListEventsResponseBody,
};
use crate::inbound::http::health::HealthBody;
use crate::inbound::http::registrations::{
    CancelResponseBody, RegisterRequestBody, RegisterResponseBody,
};
use crate::inbound::http::schemas::{ErrorSchema, ValidationErrorSchema};
use crate::inbound::http::stats::StatsResponseBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event registration API",
        description = "Event management with capacity-safe attendee registration."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::events::create_event,
        crate::inbound::http::events::list_upcoming_events,
        crate::inbound::http::events::get_event_details,
        crate::inbound::http::registrations::register_for_event,
        crate::inbound::http::registrations::cancel_registration,
        crate::inbound::http::stats::get_event_stats,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        CreateEventRequestBody,
        CreateEventResponseBody,
        EventBody,
        ListEventsResponseBody,
        AttendeeBody,
        EventDetailsResponseBody,
        RegisterRequestBody,
        RegisterResponseBody,
        CancelResponseBody,
        StatsResponseBody,
        HealthBody,
        ErrorSchema,
        ValidationErrorSchema
    )),
    tags(
        (name = "events", description = "Event creation, listing, and statistics"),
        (name = "registrations", description = "Attendee registration and cancellation"),
        (name = "health", description = "Process health probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operation_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/events",
            "/api/events/{id}",
            "/api/events/{id}/register",
            "/api/events/{id}/register/{user_id}",
            "/api/events/{id}/stats",
            "/health",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn error_envelopes_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        assert!(schemas.contains_key("ErrorSchema"));
        assert!(schemas.contains_key("ValidationErrorSchema"));
    }
}
