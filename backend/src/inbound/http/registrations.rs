//! Registration HTTP handlers.
//!
//! ```text
//! POST   /api/events/{id}/register            Register an attendee
//! DELETE /api/events/{id}/register/{user_id}  Cancel a registration
//! ```

use actix_web::{HttpResponse, delete, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AttendeeRef, Error, EventId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_uuid;

/// Request payload for registering an attendee.
///
/// Either `userId` names an existing user, or `email` (with an optional
/// `name`) identifies the attendee, creating a user record on first sight of
/// the address. When both are present the explicit id wins.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestBody {
    /// Identifier of an existing user.
    #[serde(default)]
    #[schema(format = "uuid")]
    pub user_id: Option<String>,
    /// Display name for a user created from this request.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address identifying the attendee.
    #[serde(default)]
    pub email: Option<String>,
}

/// Response payload for a successful registration.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseBody {
    /// Identifier of the new registration.
    #[schema(format = "uuid")]
    pub registration_id: String,
    /// The attendee, resolved from the request.
    #[schema(format = "uuid")]
    pub user_id: String,
    /// The event registered for.
    #[schema(format = "uuid")]
    pub event_id: String,
}

/// Response payload for a cancelled registration.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CancelResponseBody {
    /// Confirmation message.
    #[schema(example = "Registration cancelled")]
    pub message: String,
}

fn resolve_attendee(body: RegisterRequestBody) -> Result<AttendeeRef, Error> {
    if let Some(raw) = body.user_id {
        return Ok(AttendeeRef::Existing(UserId::from_uuid(parse_uuid(
            &raw, "userId",
        )?)));
    }
    match body.email {
        Some(email) if !email.trim().is_empty() => Ok(AttendeeRef::ByEmail {
            name: body.name.filter(|name| !name.trim().is_empty()),
            email,
        }),
        _ => Err(Error::validation(vec![
            "either userId or email is required".to_owned(),
        ])),
    }
}

/// Register an attendee for an event.
#[utoipa::path(
    post,
    path = "/api/events/{id}/register",
    params(
        ("id" = String, Path, description = "Event identifier (UUID)")
    ),
    request_body = RegisterRequestBody,
    responses(
        (status = 201, description = "Registration created", body = RegisterResponseBody),
        (status = 400, description = "Invalid request, past event, or event full", body = crate::inbound::http::schemas::ValidationErrorSchema),
        (status = 404, description = "Event not found", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 409, description = "Already registered", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "registerForEvent"
)]
#[post("/{id}/register")]
pub async fn register_for_event(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RegisterRequestBody>,
) -> ApiResult<HttpResponse> {
    let event_id = EventId::from_uuid(parse_uuid(&path.into_inner(), "id")?);
    let attendee = resolve_attendee(payload.into_inner())?;

    let receipt = state.registrations.register(event_id, attendee).await?;

    Ok(HttpResponse::Created().json(RegisterResponseBody {
        registration_id: receipt.registration_id.to_string(),
        user_id: receipt.user_id.to_string(),
        event_id: receipt.event_id.to_string(),
    }))
}

/// Cancel a registration.
#[utoipa::path(
    delete,
    path = "/api/events/{id}/register/{user_id}",
    params(
        ("id" = String, Path, description = "Event identifier (UUID)"),
        ("user_id" = String, Path, description = "User identifier (UUID)")
    ),
    responses(
        (status = 200, description = "Registration cancelled", body = CancelResponseBody),
        (status = 400, description = "Malformed identifier", body = crate::inbound::http::schemas::ValidationErrorSchema),
        (status = 404, description = "Registration not found", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "cancelRegistration"
)]
#[delete("/{id}/register/{user_id}")]
pub async fn cancel_registration(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_event, raw_user) = path.into_inner();
    let event_id = EventId::from_uuid(parse_uuid(&raw_event, "id")?);
    let user_id = UserId::from_uuid(parse_uuid(&raw_user, "userId")?);

    state.registrations.cancel(event_id, user_id).await?;

    Ok(HttpResponse::Ok().json(CancelResponseBody {
        message: "Registration cancelled".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{
        FixtureEventRegistry, FixtureEventStats, FixtureRegistrationCommand,
        MockRegistrationCommand,
    };

    const EVENT_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
    const USER_ID: &str = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff";

    fn state_with(commands: Arc<dyn crate::domain::ports::RegistrationCommand>) -> HttpState {
        HttpState::new(
            Arc::new(FixtureEventRegistry),
            commands,
            Arc::new(FixtureEventStats),
        )
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
                actix_web::dev::ServiceRequest,
                Config = (),
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
                InitError = (),
            >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .app_data(crate::inbound::http::json_config())
            .service(
                web::scope("/api/events")
                    .service(register_for_event)
                    .service(cancel_registration),
            )
    }

    #[rstest]
    fn explicit_user_id_wins_over_email() {
        let attendee = resolve_attendee(RegisterRequestBody {
            user_id: Some(USER_ID.to_owned()),
            name: Some("Ada".to_owned()),
            email: Some("ada@example.com".to_owned()),
        })
        .expect("resolves");
        assert!(matches!(attendee, AttendeeRef::Existing(_)));
    }

    #[rstest]
    #[case(None, None)]
    #[case(None, Some("   ".to_owned()))]
    fn missing_attendee_identity_is_a_validation_error(
        #[case] name: Option<String>,
        #[case] email: Option<String>,
    ) {
        let err = resolve_attendee(RegisterRequestBody {
            user_id: None,
            name,
            email,
        })
        .expect_err("no identity supplied");
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[rstest]
    fn blank_name_is_dropped_from_email_registration() {
        let attendee = resolve_attendee(RegisterRequestBody {
            user_id: None,
            name: Some(String::new()),
            email: Some("ada@example.com".to_owned()),
        })
        .expect("resolves");
        assert_eq!(
            attendee,
            AttendeeRef::ByEmail {
                name: None,
                email: "ada@example.com".to_owned(),
            }
        );
    }

    #[actix_web::test]
    async fn register_by_email_returns_201_with_receipt() {
        let app = actix_test::init_service(test_app(state_with(Arc::new(
            FixtureRegistrationCommand,
        ))))
        .await;

        let request = actix_test::TestRequest::post()
            .uri(&format!("/api/events/{EVENT_ID}/register"))
            .set_json(json!({ "name": "Ada", "email": "ada@example.com" }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("eventId").and_then(Value::as_str), Some(EVENT_ID));
        for key in ["registrationId", "userId"] {
            let raw = body.get(key).and_then(Value::as_str).expect("uuid field");
            uuid::Uuid::parse_str(raw).expect("field is a UUID");
        }
    }

    #[actix_web::test]
    async fn register_with_existing_user_id_echoes_it_back() {
        let app = actix_test::init_service(test_app(state_with(Arc::new(
            FixtureRegistrationCommand,
        ))))
        .await;

        let request = actix_test::TestRequest::post()
            .uri(&format!("/api/events/{EVENT_ID}/register"))
            .set_json(json!({ "userId": USER_ID }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("userId").and_then(Value::as_str), Some(USER_ID));
    }

    #[rstest]
    #[case(Error::not_found("Event not found"), StatusCode::NOT_FOUND)]
    #[case(Error::invalid_state("Cannot register for past event"), StatusCode::BAD_REQUEST)]
    #[case(Error::conflict("Already registered"), StatusCode::CONFLICT)]
    #[case(Error::capacity_exceeded("Event is full"), StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn register_surfaces_domain_outcomes(
        #[case] error: Error,
        #[case] expected: StatusCode,
    ) {
        let mut commands = MockRegistrationCommand::new();
        commands
            .expect_register()
            .returning(move |_, _| Err(error.clone()));

        let app = actix_test::init_service(test_app(state_with(Arc::new(commands)))).await;
        let request = actix_test::TestRequest::post()
            .uri(&format!("/api/events/{EVENT_ID}/register"))
            .set_json(json!({ "email": "ada@example.com" }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), expected);
    }

    #[actix_web::test]
    async fn mistyped_body_fields_get_the_validation_envelope() {
        let app = actix_test::init_service(test_app(state_with(Arc::new(
            FixtureRegistrationCommand,
        ))))
        .await;

        let request = actix_test::TestRequest::post()
            .uri(&format!("/api/events/{EVENT_ID}/register"))
            .set_json(json!({ "email": 5 }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert!(
            body.get("errors").and_then(Value::as_array).is_some(),
            "expected the validation envelope, got {body}"
        );
    }

    #[actix_web::test]
    async fn cancel_returns_confirmation_message() {
        let app = actix_test::init_service(test_app(state_with(Arc::new(
            FixtureRegistrationCommand,
        ))))
        .await;

        let request = actix_test::TestRequest::delete()
            .uri(&format!("/api/events/{EVENT_ID}/register/{USER_ID}"))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Registration cancelled")
        );
    }

    #[actix_web::test]
    async fn cancel_unknown_registration_is_404() {
        let mut commands = MockRegistrationCommand::new();
        commands
            .expect_cancel()
            .returning(|_, _| Err(Error::not_found("Registration not found")));

        let app = actix_test::init_service(test_app(state_with(Arc::new(commands)))).await;
        let request = actix_test::TestRequest::delete()
            .uri(&format!("/api/events/{EVENT_ID}/register/{USER_ID}"))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some("Registration not found")
        );
    }

    #[actix_web::test]
    async fn cancel_with_malformed_user_id_is_400() {
        let app = actix_test::init_service(test_app(state_with(Arc::new(
            FixtureRegistrationCommand,
        ))))
        .await;

        let request = actix_test::TestRequest::delete()
            .uri(&format!("/api/events/{EVENT_ID}/register/not-a-uuid"))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
