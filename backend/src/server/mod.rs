//! Server construction and port wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{
    FixtureEventRegistry, FixtureEventStats, FixtureRegistrationCommand,
};
use crate::domain::{EventRegistryService, RegistrationCoordinator, StatsService};
use crate::inbound::http::{self, HttpState, health::health};
use crate::outbound::persistence::{DieselEventRepository, DieselRegistrationStore};

/// Wire the HTTP state from configuration.
///
/// With a database pool the real Diesel-backed services are used; without
/// one the fixture ports stand in, which keeps the HTTP surface exercisable
/// in tests that never touch storage.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match config.db_pool() {
        Some(pool) => {
            let events = Arc::new(DieselEventRepository::new(pool.clone()));
            let store = Arc::new(DieselRegistrationStore::new(pool.clone()));
            HttpState::new(
                Arc::new(EventRegistryService::new(Arc::clone(&events))),
                Arc::new(RegistrationCoordinator::new(store)),
                Arc::new(StatsService::new(events)),
            )
        }
        None => HttpState::new(
            Arc::new(FixtureEventRegistry),
            Arc::new(FixtureRegistrationCommand),
            Arc::new(FixtureEventStats),
        ),
    }
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(http::json_config())
        .service(http::event_scope())
        .service(health);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the Actix HTTP server from configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}
