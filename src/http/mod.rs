//! HTTP server module.
//!
//! Plain-HTTP serving with graceful shutdown on SIGTERM/SIGINT. TLS
//! termination and routing to other services are the responsibility of a
//! fronting reverse proxy.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
