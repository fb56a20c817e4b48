//! Event HTTP handlers.
//!
//! ```text
//! POST /api/events       Create an event
//! GET  /api/events       List upcoming events
//! GET  /api/events/{id}  Event details with registered attendees
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Event, EventDetails, EventDraft, EventId, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_uuid;

/// Request payload for creating an event.
///
/// Every field is optional at the boundary so the validators can report all
/// missing or malformed values together instead of failing on the first.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateEventRequestBody {
    /// Event title.
    pub title: Option<String>,
    /// Scheduled instant, RFC 3339.
    #[schema(format = "date-time")]
    pub date_time: Option<String>,
    /// Event location.
    pub location: Option<String>,
    /// Attendee capacity, 1 to 1000 inclusive.
    pub capacity: Option<i64>,
}

/// Response payload for a created event.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponseBody {
    /// Identifier of the new event.
    #[schema(format = "uuid")]
    pub event_id: String,
}

/// Serialised event record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventBody {
    /// Event identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Event title.
    pub title: String,
    /// Scheduled instant, RFC 3339.
    #[schema(format = "date-time")]
    pub event_datetime: String,
    /// Event location.
    pub location: String,
    /// Attendee capacity.
    pub capacity: i32,
}

impl From<&Event> for EventBody {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().to_string(),
            title: event.title().to_owned(),
            event_datetime: event.event_datetime().to_rfc3339(),
            location: event.location().to_owned(),
            capacity: event.capacity(),
        }
    }
}

/// Response payload for the upcoming-events listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListEventsResponseBody {
    /// Upcoming events, soonest first, ties broken by location.
    pub events: Vec<EventBody>,
}

/// A registered attendee as exposed in event details.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendeeBody {
    /// User identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Display name, when one was supplied at registration.
    pub name: Option<String>,
    /// Email address.
    pub email: String,
}

impl From<&User> for AttendeeBody {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().map(ToOwned::to_owned),
            email: user.email().to_owned(),
        }
    }
}

/// Response payload for event details: event fields plus attendees.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDetailsResponseBody {
    /// The event record, flattened into the top-level object.
    #[serde(flatten)]
    pub event: EventBody,
    /// Attendees holding an active registration.
    pub registrations: Vec<AttendeeBody>,
}

impl From<&EventDetails> for EventDetailsResponseBody {
    fn from(details: &EventDetails) -> Self {
        Self {
            event: EventBody::from(&details.event),
            registrations: details.attendees.iter().map(AttendeeBody::from).collect(),
        }
    }
}

/// Create an event.
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequestBody,
    responses(
        (status = 201, description = "Event created", body = CreateEventResponseBody),
        (status = 400, description = "Validation failed", body = crate::inbound::http::schemas::ValidationErrorSchema)
    ),
    tags = ["events"],
    operation_id = "createEvent"
)]
#[post("")]
pub async fn create_event(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEventRequestBody>,
) -> ApiResult<HttpResponse> {
    let CreateEventRequestBody {
        title,
        date_time,
        location,
        capacity,
    } = payload.into_inner();

    let event_id = state
        .events
        .create_event(EventDraft {
            title,
            date_time,
            location,
            capacity,
        })
        .await?;

    Ok(HttpResponse::Created().json(CreateEventResponseBody {
        event_id: event_id.to_string(),
    }))
}

/// List upcoming events.
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Upcoming events", body = ListEventsResponseBody)
    ),
    tags = ["events"],
    operation_id = "listUpcomingEvents"
)]
#[get("")]
pub async fn list_upcoming_events(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let events = state.events.list_upcoming(Utc::now()).await?;

    Ok(HttpResponse::Ok().json(ListEventsResponseBody {
        events: events.iter().map(EventBody::from).collect(),
    }))
}

/// Fetch one event with its registered attendees.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event identifier (UUID)")
    ),
    responses(
        (status = 200, description = "Event details", body = EventDetailsResponseBody),
        (status = 400, description = "Malformed identifier", body = crate::inbound::http::schemas::ValidationErrorSchema),
        (status = 404, description = "Event not found", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "getEventDetails"
)]
#[get("/{id}")]
pub async fn get_event_details(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let event_id = EventId::from_uuid(parse_uuid(&path.into_inner(), "id")?);
    let details = state.events.event_details(event_id).await?;

    Ok(HttpResponse::Ok().json(EventDetailsResponseBody::from(&details)))
}
