//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting actix handlers
//! turn domain failures into consistent JSON responses: validation failures
//! carry `{"errors": [...]}` with every violation, everything else carries
//! `{"error": message}`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Validation { .. } | Error::CapacityExceeded { .. } | Error::InvalidState { .. } => {
            StatusCode::BAD_REQUEST
        }
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::Conflict { .. } => StatusCode::CONFLICT,
        Error::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation { errors } => json!({ "errors": errors }),
            Self::Internal { message } => {
                // Do not leak internal diagnostics to clients.
                error!(error = %message, "internal error surfaced to HTTP adapter");
                json!({ "error": "Internal server error" })
            }
            other => json!({ "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::validation(vec!["title is required".into()]), StatusCode::BAD_REQUEST)]
    #[case(Error::capacity_exceeded("Event is full"), StatusCode::BAD_REQUEST)]
    #[case(Error::invalid_state("Cannot register for past event"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("Event not found"), StatusCode::NOT_FOUND)]
    #[case(Error::conflict("Already registered"), StatusCode::CONFLICT)]
    #[case(Error::unavailable("pool exhausted"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("bug"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn each_error_kind_maps_to_its_status(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[rstest]
    fn validation_body_lists_every_violation() {
        let error = Error::validation(vec![
            "title is required".into(),
            "capacity must be an integer between 1 and 1000".into(),
        ]);
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    fn internal_messages_are_redacted() {
        let response = Error::internal("connection string leaked").error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
