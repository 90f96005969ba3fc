//! HTTP route handlers.
//!
//! A single liveness route is exposed; any other path falls through to the
//! default 404 fallback. The CORS layer wraps the whole router, fallback
//! included, and request tracing is the outermost layer so its span covers
//! all request processing.

pub mod health;

use axum::{middleware, routing::get, Router};

use crate::cors::cors_layer;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and middleware layers.
pub fn create_router() -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .layer(cors_layer())
        .layer(middleware::from_fn(request_id_layer))
}
