use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use service_health::config::Config;
use service_health::graphql::schema::create_schema;
use service_health::openapi::ApiDoc;
use service_health::probes::{PgDatabaseProbe, RedisCacheProbe};
use service_health::reporter::HealthReporter;
use service_health::telemetry::init_tracing;
use sqlx::postgres::PgPoolOptions;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Service Health Entry Point
///
/// # Endpoints
/// - Health: `/health`
/// - GraphQL: `/api/v1/graphql`, playground at `/api/v1/playground`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// The database pool is lazy, so the server comes up even when PostgreSQL
/// is down and `/health` reports what it finds.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    tracing::info!(
        host = %config.host,
        port = config.port,
        redis_configured = config.redis_url.is_some(),
        "Configuration loaded"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_lazy(&config.database_url)?;

    let reporter = HealthReporter::new(
        Arc::new(PgDatabaseProbe::new(pool)),
        Arc::new(RedisCacheProbe::new(config.redis_url.clone())),
    );
    let schema = create_schema(reporter.clone());

    let addr = config.bind_address();
    tracing::info!(host = %addr.0, port = addr.1, "Starting server");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(reporter.clone()))
            .app_data(Data::new(schema.clone()))
            .configure(service_health::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(addr)?
    .run()
    .await?;

    tracing::info!("Server shut down");
    Ok(())
}
