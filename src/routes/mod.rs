use actix_web::web;

/// # Health Check Endpoint
///
/// Reports whether the process answers and whether its database and cache
/// are reachable.
///
/// ## Response
///
/// - **200 OK**: Process is serving
///   - Body: JSON object with `status`, `timestamp` and `services`
/// - **500 Internal Server Error**: The database liveness query failed
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2023-10-05T12:34:56Z",
///   "services": { "database": "ok", "redis": "ok" }
/// }
/// ```
pub mod health;

/// GraphQL endpoint and playground
pub mod graphql;


/// # Route Configuration
///
/// ## Mounted Services
/// - Health check at the root, where orchestrators expect it
///   (see [`health::configure_routes`])
/// - GraphQL under the `/api/v1` base path (see [`graphql::configure_routes`])
///
/// ## Endpoints
///
/// ```text
/// GET  /health               - Service and dependency health
/// POST /api/v1/graphql       - GraphQL queries
/// GET  /api/v1/playground    - GraphQL playground
/// ```
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`graphql::configure_routes`]: crate::routes::graphql::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(web::scope("/api/v1").configure(graphql::configure_routes));
}
