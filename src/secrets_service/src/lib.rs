//! The secrets web application: routes, sessions, static assets and request tracing
//! assembled into one axum service.

pub mod helpers;
pub mod secrets_service;
pub mod telemetry;

pub use secrets_service::SecretsService;
