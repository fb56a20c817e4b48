//! Capacity-utilisation endpoint.

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{EventId, EventStatsReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_uuid;

/// Response payload for event capacity statistics.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponseBody {
    /// Number of active registrations.
    pub total_registrations: i64,
    /// Seats still available.
    pub remaining_capacity: i64,
    /// Percentage of capacity in use, rounded to two decimal places.
    #[schema(example = 33.33)]
    pub percentage_capacity_used: f64,
}

impl From<EventStatsReport> for StatsResponseBody {
    fn from(report: EventStatsReport) -> Self {
        Self {
            total_registrations: report.total_registrations,
            remaining_capacity: report.remaining_capacity,
            percentage_capacity_used: report.percentage_used,
        }
    }
}

/// Report registration totals and remaining capacity for an event.
#[utoipa::path(
    get,
    path = "/api/events/{id}/stats",
    params(
        ("id" = String, Path, description = "Event identifier (UUID)")
    ),
    responses(
        (status = 200, description = "Capacity statistics", body = StatsResponseBody),
        (status = 400, description = "Malformed identifier", body = crate::inbound::http::schemas::ValidationErrorSchema),
        (status = 404, description = "Event not found", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "getEventStats"
)]
#[get("/{id}/stats")]
pub async fn get_event_stats(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let event_id = EventId::from_uuid(parse_uuid(&path.into_inner(), "id")?);
    let report = state.stats.event_stats(event_id).await?;

    Ok(HttpResponse::Ok().json(StatsResponseBody::from(report)))
}
