//! # Service Health
//!
//! A `GET /health` endpoint that reports whether this process answers and
//! whether its PostgreSQL database and Redis cache are reachable.
//!
//! ## Modules
//!
//! - [`reporter`] - runs the checks and builds the report
//! - [`probes`] - database and cache liveness seams and their adapters
//! - [`routes`] - REST and GraphQL route wiring
//! - [`config`] - environment configuration

pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod openapi;
pub mod probes;
pub mod reporter;
pub mod routes;
pub mod telemetry;

#[cfg(test)]
mod test_support;
