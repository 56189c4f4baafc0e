//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the placement workflow with its injected capabilities
//! - `routes.rs`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and conversion into domain types
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(ServiceBuilder::new().layer(Extension(services)))
}
