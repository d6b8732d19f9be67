//! Middleware for logging how long each request takes.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::endpoints;

/// Log the method, path, query and processing time of each request.
///
/// The log entry is emitted at the `info` level once the inner service has
/// produced a response. Health checks are not logged, see [should_log_request].
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let query = request.uri().query().unwrap_or_default().to_owned();

    let response = next.run(request).await;

    if should_log_request(&path) {
        let elapsed = start.elapsed();
        tracing::info!(
            req_method = %method,
            req_path = %path,
            req_query = %query,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "request processing time: {elapsed:?}"
        );
    }

    response
}

/// Whether the request to `path` should be logged by [logging_middleware].
///
/// Only an exact match on the health check path is skipped.
pub fn should_log_request(path: &str) -> bool {
    path != endpoints::HEALTH
}
