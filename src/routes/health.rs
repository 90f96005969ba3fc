//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns a fixed JSON status when the
//! process is running. Used by Kubernetes, load balancers, and frontend
//! connectivity checks to verify the service is alive.

use axum::Json;
use serde::Serialize;

/// Payload returned by the liveness probe. Built fresh per request.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

/// Health check handler.
///
/// Returns `{"status":"healthy"}` to indicate the service is running.
/// This is a liveness probe - it only checks that the process can respond
/// to HTTP, and performs no I/O of its own.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serializes_to_fixed_payload() {
        let payload = HealthStatus { status: "healthy" };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"status":"healthy"}"#
        );
    }
}
