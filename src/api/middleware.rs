//! Request-tracking middleware.
//!
//! Every request gets a fresh UUID and exactly one structured log line
//! once the response is ready. Telemetry goes through the `tracing`
//! dispatcher installed at startup rather than any module-level client,
//! so tests and alternate deployments can swap the sink freely.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

/// Tags each request with a generated id and logs method, URI, status,
/// and elapsed time once the response is ready.
///
/// Client errors are part of normal operation for a validation-heavy
/// API and stay at info level; server errors (which the pure core
/// cannot produce) are logged at error level.
pub async fn track_request(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        tracing::error!(
            %request_id,
            %method,
            %uri,
            status = status.as_u16(),
            elapsed = ?started.elapsed(),
            "request failed"
        );
    } else {
        tracing::info!(
            %request_id,
            %method,
            %uri,
            status = status.as_u16(),
            elapsed = ?started.elapsed(),
            "request handled"
        );
    }

    response
}

// =============================================================================
// Tests
// =============================================================================
