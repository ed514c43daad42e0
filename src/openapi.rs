use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa` annotations on the REST
/// handlers and served at `/api-docs/openapi.json`.
///
/// # Endpoints
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `HealthResponse`, `ServicesStatus`, `OverallStatus`, `ServiceState`
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health::health),
    components(schemas(
        crate::models::health::HealthResponse,
        crate::models::health::ServicesStatus,
        crate::models::health::OverallStatus,
        crate::models::health::ServiceState,
    )),
    tags(
        (name = "Health Check", description = "Process and dependency liveness"),
        (name = "GraphQL", description = "GraphQL mirror of the health document")
    ),
    info(
        description = "Liveness of the web process and its database and cache",
        title = "Service Health API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
