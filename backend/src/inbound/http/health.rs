//! Health endpoint for orchestration and load balancers.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Health probe response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthBody {
    /// Always `"ok"` while the process is serving traffic.
    #[schema(example = "ok")]
    pub status: &'static str,
}

/// Report process health.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is up", body = HealthBody)
    )
)]
#[get("/health")]
pub async fn health() -> web::Json<HealthBody> {
    web::Json(HealthBody { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = actix_test::init_service(App::new().service(health)).await;
        let request = actix_test::TestRequest::get().uri("/health").to_request();

        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("status").and_then(Value::as_str), Some("ok"));
    }
}
