use crate::error::AppResult;
use crate::models::health::HealthResponse;
use crate::reporter::HealthReporter;
use actix_web::{HttpResponse, get, web};
use tracing::instrument;

/// # Health Check Endpoint
///
/// Runs the database check, then the cache check, and returns the combined
/// document. `status` is always `"healthy"`; dependency problems only show
/// up under `services`.
///
/// A failing cache never fails the request. A failing database liveness
/// query does, and is answered with `500`.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is serving", body = HealthResponse),
        (status = 500, description = "Database liveness query failed")
    ),
    tag = "Health Check"
)]
#[get("/health")]
#[instrument(skip_all)]
pub async fn health(reporter: web::Data<HealthReporter>) -> AppResult<HttpResponse> {
    let report = reporter.report().await?;
    Ok(HttpResponse::Ok().json(HealthResponse::from(&report)))
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
