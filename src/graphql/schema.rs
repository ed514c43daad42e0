use super::health::HealthQuery;
use crate::reporter::HealthReporter;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};

/// Main GraphQL Schema Definition
///
/// Read-only: the health query is the only root field.
pub type AppSchema = Schema<HealthQuery, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema with the shared [`HealthReporter`] attached
/// as schema data, so resolvers run the same checks as `GET /health`.
pub fn create_schema(reporter: HealthReporter) -> AppSchema {
    Schema::build(
        HealthQuery::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .data(reporter)
    .finish()
}
